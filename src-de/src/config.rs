use serde::{Deserialize, Serialize};

use crate::parallel_eval::ParallelConfig;

/// Configuration for the differential evolution engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeConfig {
    /// Individuals per generation.
    pub population_size: usize,
    /// Generations executed by a full run.
    pub generations: usize,
    /// Weights per individual.
    pub dimension: usize,
    /// Differential weight F applied to difference vectors.
    pub mutation_factor: f64,
    /// Crossover probability CR in [0, 1].
    pub crossover_rate: f64,
    /// Uniform initialisation range for weights, lower < upper.
    pub weight_bounds: (f64, f64),
    /// Seed for deterministic runs; `None` seeds from the thread RNG.
    pub seed: Option<u64>,
    /// Print best/mean fitness at each generation.
    pub disp: bool,
    /// Parallel evaluation configuration.
    pub parallel: ParallelConfig,
}

impl Default for DeConfig {
    fn default() -> Self {
        Self {
            population_size: 15,
            generations: 200,
            dimension: 2,
            mutation_factor: 0.8,
            crossover_rate: 0.9,
            weight_bounds: (-1.0, 1.0),
            seed: None,
            disp: false,
            parallel: ParallelConfig::default(),
        }
    }
}

/// Fluent builder for `DeConfig` for ergonomic configuration.
pub struct DeConfigBuilder {
    cfg: DeConfig,
}

impl DeConfigBuilder {
    pub fn new() -> Self {
        Self { cfg: DeConfig::default() }
    }
    pub fn population_size(mut self, v: usize) -> Self {
        self.cfg.population_size = v;
        self
    }
    pub fn generations(mut self, v: usize) -> Self {
        self.cfg.generations = v;
        self
    }
    pub fn dimension(mut self, v: usize) -> Self {
        self.cfg.dimension = v;
        self
    }
    pub fn mutation_factor(mut self, v: f64) -> Self {
        self.cfg.mutation_factor = v;
        self
    }
    pub fn crossover_rate(mut self, v: f64) -> Self {
        self.cfg.crossover_rate = v;
        self
    }
    pub fn weight_bounds(mut self, lower: f64, upper: f64) -> Self {
        self.cfg.weight_bounds = (lower, upper);
        self
    }
    pub fn seed(mut self, v: u64) -> Self {
        self.cfg.seed = Some(v);
        self
    }
    pub fn disp(mut self, v: bool) -> Self {
        self.cfg.disp = v;
        self
    }
    pub fn parallel(mut self, parallel: ParallelConfig) -> Self {
        self.cfg.parallel = parallel;
        self
    }
    pub fn enable_parallel(mut self, enable: bool) -> Self {
        self.cfg.parallel.enabled = enable;
        self
    }
    pub fn parallel_threads(mut self, num_threads: usize) -> Self {
        self.cfg.parallel.num_threads = Some(num_threads);
        self
    }
    pub fn build(self) -> DeConfig {
        self.cfg
    }
}

impl Default for DeConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
