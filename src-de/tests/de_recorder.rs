//! Recording callbacks: CSV traces, improvement tracking and early stop.

use std::fs;
use std::sync::Arc;

use evoconv_de::{
    CallbackAction, DeConfigBuilder, DifferentialEvolution, EvolutionRecorder, ObjectiveFitness,
    run_recorded,
};
use evoconv_testfunctions::sphere;

fn sphere_engine(generations: usize, seed: u64) -> DifferentialEvolution {
    let config = DeConfigBuilder::new()
        .seed(seed)
        .generations(generations)
        .population_size(12)
        .dimension(2)
        .weight_bounds(-5.0, 5.0)
        .build();
    DifferentialEvolution::with_defaults(Arc::new(ObjectiveFitness::new(sphere)), config)
}

#[test]
fn test_run_recorded_writes_one_row_per_generation() {
    let dir = tempfile::tempdir().unwrap();
    let mut engine = sphere_engine(25, 21);

    let (report, csv_path) =
        run_recorded(&mut engine, "sphere_trace", dir.path().to_str().unwrap()).unwrap();

    assert_eq!(report.generations, 25);
    assert!(csv_path.ends_with("sphere_trace.csv"));

    let contents = fs::read_to_string(&csv_path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines[0], "generation,best_fitness,mean_fitness,is_improvement");
    assert_eq!(lines.len(), 26);
}

#[test]
fn test_best_fitness_never_worsens_under_greedy_selection() {
    let mut engine = sphere_engine(40, 22);
    let recorder = EvolutionRecorder::new("monotone".to_string());
    engine.set_callback(recorder.create_callback());

    engine.run().unwrap();

    let records = recorder.records();
    assert_eq!(records.len(), 40);
    assert!(records[0].is_improvement);
    for pair in records.windows(2) {
        assert!(
            pair[1].best_fitness <= pair[0].best_fitness,
            "best fitness rose from {} to {} at generation {}",
            pair[0].best_fitness,
            pair[1].best_fitness,
            pair[1].generation
        );
    }
}

#[test]
fn test_callback_can_stop_a_run_early() {
    let mut engine = sphere_engine(50, 23);
    engine.set_callback(Box::new(|summary| {
        if summary.generation >= 5 { CallbackAction::Stop } else { CallbackAction::Continue }
    }));

    let report = engine.run().unwrap();

    assert_eq!(report.generations, 5);
    assert_eq!(report.population.len(), 12);
    assert_eq!(report.fitness_evaluations, 5 * 12 * 2);
}
