//! Per-generation trace of an evolution run, exportable as CSV.

use std::error::Error;
use std::fs::create_dir_all;
use std::sync::{Arc, Mutex};

use serde::Serialize;

use crate::engine::{CallbackAction, DifferentialEvolution, EvolutionReport, GenerationSummary};

/// A single recorded generation.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationRecord {
    /// Generation number, starting at 1.
    pub generation: usize,
    /// Best fitness in the population after this generation.
    pub best_fitness: f64,
    /// Mean fitness over the population.
    pub mean_fitness: f64,
    /// Whether this generation improved on the best seen so far.
    pub is_improvement: bool,
}

/// Records evolution progress via engine callbacks.
#[derive(Debug)]
pub struct EvolutionRecorder {
    /// Run name (used for the CSV filename)
    run_name: String,
    /// Shared records storage
    records: Arc<Mutex<Vec<GenerationRecord>>>,
    /// Best fitness seen so far
    best_value: Arc<Mutex<Option<f64>>>,
}

impl EvolutionRecorder {
    /// Create a new recorder for the given run.
    pub fn new(run_name: String) -> Self {
        Self {
            run_name,
            records: Arc::new(Mutex::new(Vec::new())),
            best_value: Arc::new(Mutex::new(None)),
        }
    }

    /// Create a callback that appends one record per generation.
    pub fn create_callback(&self) -> Box<dyn FnMut(&GenerationSummary) -> CallbackAction + Send> {
        let records = self.records.clone();
        let best_value = self.best_value.clone();

        Box::new(move |summary: &GenerationSummary| -> CallbackAction {
            let mut best_guard = best_value.lock().unwrap();
            let is_improvement = match *best_guard {
                Some(best) => summary.best_fitness < best,
                None => true,
            };
            if is_improvement {
                *best_guard = Some(summary.best_fitness);
            }
            drop(best_guard);

            let mut records_guard = records.lock().unwrap();
            records_guard.push(GenerationRecord {
                generation: summary.generation,
                best_fitness: summary.best_fitness,
                mean_fitness: summary.mean_fitness,
                is_improvement,
            });
            drop(records_guard);

            CallbackAction::Continue
        })
    }

    /// Save all recorded generations to `<output_dir>/<run_name>.csv`.
    pub fn save_to_csv(&self, output_dir: &str) -> Result<String, Box<dyn Error>> {
        create_dir_all(output_dir)?;
        let filename = format!("{}/{}.csv", output_dir, self.run_name);

        let mut writer = csv::Writer::from_path(&filename)?;
        let records_guard = self.records.lock().unwrap();
        for record in records_guard.iter() {
            writer.serialize(record)?;
        }
        writer.flush()?;

        Ok(filename)
    }

    /// Copy of all records so far.
    pub fn records(&self) -> Vec<GenerationRecord> {
        self.records.lock().unwrap().clone()
    }

    /// Number of generations recorded.
    pub fn num_generations(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    /// Drop all records and forget the best value.
    pub fn clear(&self) {
        self.records.lock().unwrap().clear();
        *self.best_value.lock().unwrap() = None;
    }
}

/// Run an engine to completion while recording per-generation progress,
/// then save the trace as CSV.
pub fn run_recorded(
    engine: &mut DifferentialEvolution,
    run_name: &str,
    output_dir: &str,
) -> Result<(EvolutionReport, String), Box<dyn Error>> {
    let recorder = EvolutionRecorder::new(run_name.to_string());
    engine.set_callback(recorder.create_callback());

    let report = engine.run()?;
    let csv_path = recorder.save_to_csv(output_dir)?;

    Ok((report, csv_path))
}
