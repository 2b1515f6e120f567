//! Differential Evolution (DE) engine in pure Rust using ndarray
//!
//! Trains flat weight vectors by evolutionary search instead of gradients:
//! per generation and per population slot the engine samples a target and
//! difference individuals, builds a trial vector, recombines it with the
//! slot's original and keeps whichever candidate the survivor selection
//! prefers.
//!
//! Supported features:
//! - DE/rand/1 mutation with a configurable differential weight
//! - Binomial crossover with one forced trial component
//! - Random sampling and greedy survivor choice behind one selection trait
//! - Fitness memoization, exactly two evaluations per slot per generation
//! - Optional parallel fitness evaluation via rayon
//! - Per-generation callbacks, CSV recording and deterministic seeding

#![allow(missing_docs)]

use rand::SeedableRng;
use rand::rngs::StdRng;

pub mod config;
pub mod crossover_binomial;
pub mod engine;
pub mod error;
pub mod individual;
pub mod mutation_rand1;
pub mod parallel_eval;
pub mod recorder;
pub mod selection_greedy;
pub mod selection_random;
pub mod strategies;

pub use config::{DeConfig, DeConfigBuilder};
pub use crossover_binomial::BinomialCrossover;
pub use engine::{
	CallbackAction, DifferentialEvolution, EvolutionReport, GenerationCallback,
	GenerationSummary, evolve,
};
pub use error::EvolutionError;
pub use individual::Individual;
pub use mutation_rand1::Rand1Mutation;
pub use parallel_eval::ParallelConfig;
pub use recorder::{EvolutionRecorder, GenerationRecord, run_recorded};
pub use selection_greedy::GreedySelection;
pub use selection_random::RandomSelection;
pub use strategies::{
	CrossoverStrategy, FitnessEvaluation, MutationStrategy, ObjectiveFitness, SelectionStrategy,
};

/// Deterministic RNG when a seed is given, thread-seeded otherwise.
pub(crate) fn seeded_rng(seed: Option<u64>) -> StdRng {
	match seed {
		Some(s) => StdRng::seed_from_u64(s),
		None => {
			let mut thread_rng = rand::rng();
			StdRng::from_rng(&mut thread_rng)
		}
	}
}
