use std::error::Error;

/// Errors surfaced by the evolution engine and its strategy objects.
#[derive(Debug, thiserror::Error)]
pub enum EvolutionError {
    /// A selection strategy was handed an empty candidate pool.
    #[error("selection pool is empty after exclusions")]
    EmptySelectionPool,
    /// The fitness strategy failed to evaluate an individual.
    #[error("fitness evaluation failed: {0}")]
    Fitness(#[from] Box<dyn Error + Send + Sync>),
}
