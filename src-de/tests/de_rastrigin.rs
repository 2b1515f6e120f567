use evoconv_de::{DeConfigBuilder, evolve};
use evoconv_testfunctions::rastrigin;

#[test]
fn test_de_rastrigin_2d() {
    // Test 2D Rastrigin function
    let config = DeConfigBuilder::new()
        .seed(32)
        .generations(800)
        .population_size(60)
        .dimension(2)
        .weight_bounds(-5.12, 5.12)
        .mutation_factor(0.5)
        .crossover_rate(0.95)
        .build();

    let report = evolve(rastrigin, config).unwrap();

    assert!(
        report.best_fitness < 1.0,
        "rastrigin 2d stuck away from the global basin: {}",
        report.best_fitness
    );
}

#[test]
fn test_de_rastrigin_5d() {
    // Test 5D Rastrigin function, multimodal and much harder
    let config = DeConfigBuilder::new()
        .seed(33)
        .generations(1000)
        .population_size(80)
        .dimension(5)
        .weight_bounds(-5.12, 5.12)
        .mutation_factor(0.5)
        .crossover_rate(0.95)
        .build();

    let report = evolve(rastrigin, config).unwrap();

    assert!(report.best_fitness < 10.0, "rastrigin 5d too far off: {}", report.best_fitness);
}
