//! Strategy seams the engine is parameterized over.
//!
//! Everything with a degree of freedom in the evolution loop comes in
//! through one of these traits: how trial vectors mutate, how parents and
//! children recombine, how individuals are picked from pools, and how
//! fitness is scored.

use std::error::Error;

use ndarray::Array1;

use crate::error::EvolutionError;
use crate::individual::Individual;

/// Builds one trial vector from a target and the difference individuals
/// sampled for it.
///
/// `differences` is consumed pairwise; implementations must tolerate fewer
/// than two entries, which happens in degenerate populations.
pub trait MutationStrategy {
    fn trial_vector(&mut self, target: &Individual, differences: &[&Individual]) -> Individual;
}

/// Recombines an original individual with the trial produced by mutation.
pub trait CrossoverStrategy {
    fn cross(&mut self, original: &Individual, trial: &Individual) -> Individual;
}

/// Picks one individual out of a candidate pool.
///
/// The engine routes two jobs through this trait: random target/difference
/// sampling and greedy survivor choice. Implementations must hand back a
/// reference into the pool they were given.
pub trait SelectionStrategy {
    fn select<'a>(
        &mut self,
        candidates: &[&'a Individual],
    ) -> Result<&'a Individual, EvolutionError>;
}

/// Scores an individual; lower is better.
///
/// Called from worker threads when parallel evaluation is enabled, so
/// implementations must be side-effect free or lock internally.
pub trait FitnessEvaluation: Send + Sync {
    fn fitness_for(&self, individual: &Individual) -> Result<f64, Box<dyn Error + Send + Sync>>;
}

/// Adapts a plain objective closure into a [`FitnessEvaluation`].
pub struct ObjectiveFitness<F> {
    objective: F,
}

impl<F> ObjectiveFitness<F>
where
    F: Fn(&Array1<f64>) -> f64 + Send + Sync,
{
    pub fn new(objective: F) -> Self {
        Self { objective }
    }
}

impl<F> FitnessEvaluation for ObjectiveFitness<F>
where
    F: Fn(&Array1<f64>) -> f64 + Send + Sync,
{
    fn fitness_for(&self, individual: &Individual) -> Result<f64, Box<dyn Error + Send + Sync>> {
        Ok((self.objective)(individual.position()))
    }
}
