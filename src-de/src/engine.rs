use std::fmt;
use std::sync::Arc;

use ndarray::Array1;
use rand::rngs::StdRng;

use crate::config::DeConfig;
use crate::crossover_binomial::BinomialCrossover;
use crate::error::EvolutionError;
use crate::individual::Individual;
use crate::mutation_rand1::Rand1Mutation;
use crate::parallel_eval::evaluate_all;
use crate::seeded_rng;
use crate::selection_greedy::GreedySelection;
use crate::selection_random::RandomSelection;
use crate::strategies::{
    CrossoverStrategy, FitnessEvaluation, MutationStrategy, ObjectiveFitness, SelectionStrategy,
};

/// Difference individuals sampled per trial; DE/rand/1 uses one pair.
const DIFFERENCE_COUNT: usize = 2;

/// Result of a full evolution run.
#[derive(Clone)]
pub struct EvolutionReport {
    /// Best position in the final population.
    pub best_position: Array1<f64>,
    /// Fitness of `best_position`.
    pub best_fitness: f64,
    /// Generations actually completed; smaller than configured only when a
    /// callback stopped the run early.
    pub generations: usize,
    /// Total fitness strategy invocations.
    pub fitness_evaluations: usize,
    /// Final population with memoized fitness values.
    pub population: Vec<Individual>,
}

impl fmt::Debug for EvolutionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EvolutionReport")
            .field("best_position", &format!("len={}", self.best_position.len()))
            .field("best_fitness", &self.best_fitness)
            .field("generations", &self.generations)
            .field("fitness_evaluations", &self.fitness_evaluations)
            .field("population", &format!("{} individuals", self.population.len()))
            .finish()
    }
}

/// Snapshot handed to the per-generation callback.
pub struct GenerationSummary {
    pub generation: usize,
    pub best_position: Array1<f64>,
    pub best_fitness: f64,
    pub mean_fitness: f64,
}

/// Action returned by callback
pub enum CallbackAction {
    Continue,
    Stop,
}

/// Per-generation callback; may stop the run early.
pub type GenerationCallback = Box<dyn FnMut(&GenerationSummary) -> CallbackAction>;

/// Differential evolution engine over injected strategy objects.
///
/// The engine owns the population and the generation loop; mutation,
/// crossover, sampling, survivor choice and fitness all come in through the
/// constructor, so variants are swapped without touching the loop itself.
pub struct DifferentialEvolution {
    mutation: Box<dyn MutationStrategy>,
    crossover: Box<dyn CrossoverStrategy>,
    survivor_selection: Box<dyn SelectionStrategy>,
    sampling_selection: Box<dyn SelectionStrategy>,
    fitness: Arc<dyn FitnessEvaluation>,
    config: DeConfig,
    population: Vec<Individual>,
    rng: StdRng,
    nfev: usize,
    callback: Option<GenerationCallback>,
}

impl DifferentialEvolution {
    pub fn new(
        mutation: Box<dyn MutationStrategy>,
        crossover: Box<dyn CrossoverStrategy>,
        survivor_selection: Box<dyn SelectionStrategy>,
        sampling_selection: Box<dyn SelectionStrategy>,
        fitness: Arc<dyn FitnessEvaluation>,
        config: DeConfig,
    ) -> Self {
        let rng = seeded_rng(config.seed);
        Self {
            mutation,
            crossover,
            survivor_selection,
            sampling_selection,
            fitness,
            config,
            population: Vec::new(),
            rng,
            nfev: 0,
            callback: None,
        }
    }

    /// Engine wired with the standard strategy set: DE/rand/1 mutation,
    /// binomial crossover, uniform sampling and greedy survivor choice, all
    /// parameterized from `config`.
    pub fn with_defaults(fitness: Arc<dyn FitnessEvaluation>, config: DeConfig) -> Self {
        let mutation = Box::new(Rand1Mutation::new(config.mutation_factor));
        let crossover = Box::new(BinomialCrossover::new(
            config.crossover_rate,
            config.seed.map(|s| s.wrapping_add(1)),
        ));
        let sampling = Box::new(RandomSelection::new(config.seed.map(|s| s.wrapping_add(2))));
        Self::new(mutation, crossover, Box::new(GreedySelection), sampling, fitness, config)
    }

    /// Mutable access to configuration
    pub fn config_mut(&mut self) -> &mut DeConfig {
        &mut self.config
    }

    /// Install a per-generation callback.
    pub fn set_callback(&mut self, callback: GenerationCallback) {
        self.callback = Some(callback);
    }

    /// Current population, in slot order.
    pub fn population(&self) -> &[Individual] {
        &self.population
    }

    /// Fitness strategy invocations so far.
    pub fn fitness_evaluations(&self) -> usize {
        self.nfev
    }

    /// Replace the population with `size` individuals drawn uniformly from
    /// the configured weight bounds. Resets the evaluation counter.
    pub fn initialise_population(&mut self, size: usize) {
        let (lower, upper) = self.config.weight_bounds;
        assert!(lower < upper, "weight bounds must satisfy lower < upper");
        self.population = (0..size)
            .map(|_| Individual::random(self.config.dimension, lower, upper, &mut self.rng))
            .collect();
        self.nfev = 0;
    }

    /// Install an explicit population, e.g. to resume from a known state.
    pub fn set_population(&mut self, population: Vec<Individual>) {
        self.population = population;
    }

    /// Advance one generation.
    ///
    /// Per slot: sample a target and difference individuals, mutate, cross
    /// with the slot's original, evaluate both sides, then let the survivor
    /// selection pick the replacement. The population is swapped only once
    /// every slot has a survivor, so an error leaves the previous generation
    /// intact.
    pub fn next_generation(&mut self) -> Result<(), EvolutionError> {
        let count = self.population.len();

        let mut children = Vec::with_capacity(count);
        for index in 0..count {
            children.push(self.build_child(index)?);
        }

        evaluate_all(&mut self.population, self.fitness.as_ref(), &self.config.parallel)?;
        evaluate_all(&mut children, self.fitness.as_ref(), &self.config.parallel)?;
        self.nfev += 2 * count;

        let mut survivors = Vec::with_capacity(count);
        for (original, child) in self.population.iter().zip(children.iter()) {
            let survivor = self.survivor_selection.select(&[original, child])?;
            survivors.push(survivor.clone());
        }
        self.population = survivors;
        Ok(())
    }

    /// One child for population slot `index`, built against the
    /// generation-start population.
    fn build_child(&mut self, index: usize) -> Result<Individual, EvolutionError> {
        let population = &self.population;
        let everyone: Vec<&Individual> = population.iter().collect();
        let target = self.sampling_selection.select(&everyone)?;

        let mut chosen: Vec<&Individual> = vec![target];
        let mut differences: Vec<&Individual> = Vec::with_capacity(DIFFERENCE_COUNT);
        for _ in 0..DIFFERENCE_COUNT {
            let pool = difference_pool(population, &chosen);
            match self.sampling_selection.select(&pool) {
                Ok(difference) => {
                    chosen.push(difference);
                    differences.push(difference);
                }
                // a run-down pool means no further distinct differences
                Err(EvolutionError::EmptySelectionPool) => break,
                Err(error) => return Err(error),
            }
        }

        let trial = self.mutation.trial_vector(target, &differences);
        Ok(self.crossover.cross(&population[index], &trial))
    }

    /// Run the configured number of generations and report the outcome.
    ///
    /// Initialises the population first if nothing did so yet. The only
    /// early exit besides an error is a callback returning
    /// [`CallbackAction::Stop`].
    pub fn run(&mut self) -> Result<EvolutionReport, EvolutionError> {
        if self.population.is_empty() {
            self.initialise_population(self.config.population_size);
        }

        if let Some(threads) = self.config.parallel.num_threads {
            // ignore the error if the global pool is already set
            let _ = rayon::ThreadPoolBuilder::new().num_threads(threads).build_global();
        }

        if self.config.disp {
            eprintln!(
                "DE init: {} individuals of dimension {}, {} generations",
                self.population.len(),
                self.config.dimension,
                self.config.generations
            );
        }

        let mut completed = 0;
        for generation in 1..=self.config.generations {
            self.next_generation()?;
            completed = generation;

            let summary = self.summarize(generation);
            if self.config.disp {
                if let Some(ref summary) = summary {
                    eprintln!(
                        "DE gen {:4}  best_f={:.6e}  mean_f={:.6e}",
                        summary.generation, summary.best_fitness, summary.mean_fitness
                    );
                }
            }
            if let (Some(callback), Some(summary)) = (self.callback.as_mut(), summary.as_ref()) {
                if matches!(callback(summary), CallbackAction::Stop) {
                    if self.config.disp {
                        eprintln!("DE stopped by callback at generation {}", generation);
                    }
                    break;
                }
            }
        }

        Ok(self.report(completed))
    }

    /// Best/mean view of the current population; `None` until something has
    /// a fitness memo.
    fn summarize(&self, generation: usize) -> Option<GenerationSummary> {
        let (best_index, best_fitness) = best_of(&self.population)?;
        let scored: Vec<f64> = self.population.iter().filter_map(Individual::fitness).collect();
        let mean_fitness = scored.iter().sum::<f64>() / scored.len() as f64;
        Some(GenerationSummary {
            generation,
            best_position: self.population[best_index].position().clone(),
            best_fitness,
            mean_fitness,
        })
    }

    fn report(&self, completed: usize) -> EvolutionReport {
        let (best_position, best_fitness) = match best_of(&self.population) {
            Some((index, fitness)) => (self.population[index].position().clone(), fitness),
            None => (Array1::zeros(0), f64::INFINITY),
        };
        EvolutionReport {
            best_position,
            best_fitness,
            generations: completed,
            fitness_evaluations: self.nfev,
            population: self.population.clone(),
        }
    }
}

/// Candidates for difference sampling: the population in slot order minus
/// everything already chosen for this trial. Exclusion is by identity, not
/// value, so duplicated positions stay eligible.
fn difference_pool<'a>(
    population: &'a [Individual],
    excluded: &[&Individual],
) -> Vec<&'a Individual> {
    population
        .iter()
        .filter(|member| !excluded.iter().any(|picked| std::ptr::eq(*picked, *member)))
        .collect()
}

/// Index and fitness of the best scored individual; `None` when nothing has
/// a fitness memo yet.
fn best_of(population: &[Individual]) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    for (index, individual) in population.iter().enumerate() {
        if let Some(fitness) = individual.fitness() {
            match best {
                Some((_, incumbent)) if incumbent <= fitness => {}
                _ => best = Some((index, fitness)),
            }
        }
    }
    best
}

/// Convenience wrapper: evolve `config.population_size` individuals against
/// a plain objective closure using the standard strategy set.
pub fn evolve<F>(objective: F, config: DeConfig) -> Result<EvolutionReport, EvolutionError>
where
    F: Fn(&Array1<f64>) -> f64 + Send + Sync + 'static,
{
    let fitness = Arc::new(ObjectiveFitness::new(objective));
    let mut engine = DifferentialEvolution::with_defaults(fitness, config);
    engine.run()
}
