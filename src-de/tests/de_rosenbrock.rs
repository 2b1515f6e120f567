use evoconv_de::{DeConfigBuilder, evolve};
use evoconv_testfunctions::rosenbrock;

#[test]
fn test_de_rosenbrock_2d() {
    // Test 2D Rosenbrock function, narrow curved valley
    let config = DeConfigBuilder::new()
        .seed(34)
        .generations(800)
        .population_size(40)
        .dimension(2)
        .weight_bounds(-2.048, 2.048)
        .mutation_factor(0.8)
        .crossover_rate(0.9)
        .build();

    let report = evolve(rosenbrock, config).unwrap();

    assert!(report.best_fitness < 1e-2, "rosenbrock 2d did not converge: {}", report.best_fitness);
}
