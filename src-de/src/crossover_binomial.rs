use rand::Rng;
use rand::rngs::StdRng;

use crate::individual::Individual;
use crate::seeded_rng;
use crate::strategies::CrossoverStrategy;

/// Binomial crossover: each component comes from the trial with probability
/// `rate`, and one randomly chosen component always does, so the child is
/// never a pure copy of the original.
#[derive(Debug)]
pub struct BinomialCrossover {
    rate: f64,
    rng: StdRng,
}

impl BinomialCrossover {
    /// `rate` is the crossover probability CR in [0, 1].
    pub fn new(rate: f64, seed: Option<u64>) -> Self {
        Self { rate, rng: seeded_rng(seed) }
    }
}

impl CrossoverStrategy for BinomialCrossover {
    fn cross(&mut self, original: &Individual, trial: &Individual) -> Individual {
        let dimension = original.dimension();
        let mut position = original.position().clone();
        if dimension == 0 {
            return Individual::new(position);
        }

        let forced = self.rng.random_range(0..dimension);
        for (j, component) in position.iter_mut().enumerate() {
            if j == forced || self.rng.random::<f64>() < self.rate {
                *component = trial.position()[j];
            }
        }
        Individual::new(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array1, array};

    #[test]
    fn test_full_rate_takes_every_component_from_trial() {
        let original = Individual::new(array![0.0, 0.0, 0.0, 0.0]);
        let trial = Individual::new(array![1.0, 2.0, 3.0, 4.0]);
        let mut crossover = BinomialCrossover::new(1.0, Some(5));

        let child = crossover.cross(&original, &trial);
        assert_eq!(child.position(), trial.position());
        assert!(child.fitness().is_none());
    }

    #[test]
    fn test_zero_rate_still_forces_one_trial_component() {
        let original = Individual::new(Array1::zeros(8));
        let trial = Individual::new(Array1::ones(8));
        let mut crossover = BinomialCrossover::new(0.0, Some(5));

        let child = crossover.cross(&original, &trial);
        assert_eq!(child.position().sum(), 1.0);
    }

    #[test]
    fn test_same_seed_gives_same_child() {
        let original = Individual::new(array![0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        let trial = Individual::new(array![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);

        let child_a = BinomialCrossover::new(0.5, Some(17)).cross(&original, &trial);
        let child_b = BinomialCrossover::new(0.5, Some(17)).cross(&original, &trial);
        assert_eq!(child_a.position(), child_b.position());
    }

    #[test]
    fn test_parents_are_left_untouched() {
        let original = Individual::new(array![0.0, 0.0]);
        let trial = Individual::new(array![1.0, 1.0]);
        let mut crossover = BinomialCrossover::new(0.5, Some(2));

        let _child = crossover.cross(&original, &trial);
        assert_eq!(original.position(), &array![0.0, 0.0]);
        assert_eq!(trial.position(), &array![1.0, 1.0]);
    }

    #[test]
    fn test_empty_dimension_yields_empty_child() {
        let original = Individual::new(Array1::zeros(0));
        let trial = Individual::new(Array1::zeros(0));
        let mut crossover = BinomialCrossover::new(0.9, Some(1));

        let child = crossover.cross(&original, &trial);
        assert_eq!(child.dimension(), 0);
    }
}
