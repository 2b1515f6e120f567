use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::EvolutionError;
use crate::individual::Individual;
use crate::strategies::FitnessEvaluation;

/// Controls how a generation's fitness evaluations are dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParallelConfig {
    /// Evaluate individuals on the rayon thread pool instead of in order.
    pub enabled: bool,
    /// Global thread pool size; `None` keeps rayon's default.
    pub num_threads: Option<usize>,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self { enabled: false, num_threads: None }
    }
}

/// Evaluate every individual in the slice exactly once and memoize the score.
///
/// The sequential path evaluates in slice order; the parallel path keeps the
/// exactly-once guarantee but not the order. The first failure aborts the
/// batch.
pub(crate) fn evaluate_all(
    individuals: &mut [Individual],
    fitness: &dyn FitnessEvaluation,
    parallel: &ParallelConfig,
) -> Result<(), EvolutionError> {
    if parallel.enabled {
        individuals.par_iter_mut().try_for_each(|individual| -> Result<(), EvolutionError> {
            let score = fitness.fitness_for(individual)?;
            individual.set_fitness(score);
            Ok(())
        })
    } else {
        for individual in individuals.iter_mut() {
            let score = fitness.fitness_for(individual)?;
            individual.set_fitness(score);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array1, array};
    use std::error::Error;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingFitness {
        calls: AtomicUsize,
    }

    impl FitnessEvaluation for CountingFitness {
        fn fitness_for(
            &self,
            individual: &Individual,
        ) -> Result<f64, Box<dyn Error + Send + Sync>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(individual.position().sum())
        }
    }

    struct FailingFitness;

    impl FitnessEvaluation for FailingFitness {
        fn fitness_for(
            &self,
            _individual: &Individual,
        ) -> Result<f64, Box<dyn Error + Send + Sync>> {
            Err("objective exploded".into())
        }
    }

    fn population() -> Vec<Individual> {
        vec![
            Individual::new(array![1.0, 1.0]),
            Individual::new(array![2.0, 2.0]),
            Individual::new(array![3.0, 3.0]),
        ]
    }

    #[test]
    fn test_sequential_evaluation_memoizes_each_individual_once() {
        let fitness = CountingFitness { calls: AtomicUsize::new(0) };
        let mut individuals = population();
        evaluate_all(&mut individuals, &fitness, &ParallelConfig::default()).unwrap();

        assert_eq!(fitness.calls.load(Ordering::SeqCst), 3);
        let scores: Vec<f64> = individuals.iter().filter_map(Individual::fitness).collect();
        assert_eq!(scores, vec![2.0, 4.0, 6.0]);
    }

    #[test]
    fn test_parallel_evaluation_matches_sequential_scores() {
        let fitness = CountingFitness { calls: AtomicUsize::new(0) };
        let parallel = ParallelConfig { enabled: true, num_threads: None };
        let mut individuals = population();
        evaluate_all(&mut individuals, &fitness, &parallel).unwrap();

        assert_eq!(fitness.calls.load(Ordering::SeqCst), 3);
        let scores: Vec<f64> = individuals.iter().filter_map(Individual::fitness).collect();
        assert_eq!(scores, vec![2.0, 4.0, 6.0]);
    }

    #[test]
    fn test_evaluation_failure_propagates() {
        let mut individuals = vec![Individual::new(Array1::zeros(2))];
        let result = evaluate_all(&mut individuals, &FailingFitness, &ParallelConfig::default());
        assert!(matches!(result, Err(EvolutionError::Fitness(_))));
        assert!(individuals[0].fitness().is_none());
    }
}
