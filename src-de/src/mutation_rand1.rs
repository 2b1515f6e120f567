use crate::individual::Individual;
use crate::strategies::MutationStrategy;

/// DE/rand/1 mutation: the trial vector is the target plus F times each
/// sampled difference pair.
#[derive(Debug, Clone, Copy)]
pub struct Rand1Mutation {
    factor: f64,
}

impl Rand1Mutation {
    /// `factor` is the differential weight F, usually in [0, 2).
    pub fn new(factor: f64) -> Self {
        Self { factor }
    }
}

impl MutationStrategy for Rand1Mutation {
    fn trial_vector(&mut self, target: &Individual, differences: &[&Individual]) -> Individual {
        let mut position = target.position().clone();
        // an unpaired trailing individual contributes no difference vector
        for pair in differences.chunks_exact(2) {
            position = position + &((pair[0].position() - pair[1].position()) * self.factor);
        }
        Individual::new(position)
    }
}
