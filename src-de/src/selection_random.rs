use rand::Rng;
use rand::rngs::StdRng;

use crate::error::EvolutionError;
use crate::individual::Individual;
use crate::seeded_rng;
use crate::strategies::SelectionStrategy;

/// Uniform random choice, used for target and difference sampling.
#[derive(Debug)]
pub struct RandomSelection {
    rng: StdRng,
}

impl RandomSelection {
    pub fn new(seed: Option<u64>) -> Self {
        Self { rng: seeded_rng(seed) }
    }
}

impl SelectionStrategy for RandomSelection {
    fn select<'a>(
        &mut self,
        candidates: &[&'a Individual],
    ) -> Result<&'a Individual, EvolutionError> {
        if candidates.is_empty() {
            return Err(EvolutionError::EmptySelectionPool);
        }
        Ok(candidates[self.rng.random_range(0..candidates.len())])
    }
}
