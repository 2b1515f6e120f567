use ndarray::Array1;
use rand::Rng;

/// A candidate solution: a flat weight vector plus its memoized fitness.
///
/// The memo is cleared whenever the position changes, so a stale score can
/// never be compared against a fresh one.
#[derive(Debug, Clone)]
pub struct Individual {
    position: Array1<f64>,
    fitness: Option<f64>,
}

impl Individual {
    /// Wrap a position vector; the fitness memo starts empty.
    pub fn new(position: Array1<f64>) -> Self {
        Self { position, fitness: None }
    }

    /// Draw an individual with `dimension` weights uniform in [lower, upper).
    pub fn random<R: Rng + ?Sized>(dimension: usize, lower: f64, upper: f64, rng: &mut R) -> Self {
        let position = Array1::from_shape_fn(dimension, |_| rng.random_range(lower..upper));
        Self::new(position)
    }

    pub fn position(&self) -> &Array1<f64> {
        &self.position
    }

    /// Number of weights in the position vector.
    pub fn dimension(&self) -> usize {
        self.position.len()
    }

    /// Replace the position and invalidate any memoized fitness.
    pub fn set_position(&mut self, position: Array1<f64>) {
        self.position = position;
        self.fitness = None;
    }

    /// Memoized fitness, if the individual has been evaluated since its
    /// position last changed.
    pub fn fitness(&self) -> Option<f64> {
        self.fitness
    }

    pub fn set_fitness(&mut self, fitness: f64) {
        self.fitness = Some(fitness);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_new_individual_has_no_fitness() {
        let individual = Individual::new(array![1.0, 2.0]);
        assert!(individual.fitness().is_none());
        assert_eq!(individual.dimension(), 2);
    }

    #[test]
    fn test_set_position_clears_fitness() {
        let mut individual = Individual::new(array![1.0]);
        individual.set_fitness(0.25);
        assert_eq!(individual.fitness(), Some(0.25));

        individual.set_position(array![2.0]);
        assert!(individual.fitness().is_none());
        assert_eq!(individual.position(), &array![2.0]);
    }

    #[test]
    fn test_clone_keeps_memoized_fitness() {
        let mut individual = Individual::new(array![1.0, 2.0]);
        individual.set_fitness(3.5);
        let copy = individual.clone();
        assert_eq!(copy.fitness(), Some(3.5));
        assert_eq!(copy.position(), individual.position());
    }

    #[test]
    fn test_random_respects_bounds_and_dimension() {
        let mut rng = StdRng::seed_from_u64(42);
        let individual = Individual::random(16, -1.0, 1.0, &mut rng);
        assert_eq!(individual.dimension(), 16);
        assert!(individual.position().iter().all(|&w| (-1.0..1.0).contains(&w)));
        assert!(individual.fitness().is_none());
    }
}
