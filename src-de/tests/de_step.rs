use evoconv_de::{DeConfigBuilder, evolve};
use evoconv_testfunctions::step;

#[test]
fn test_de_step_2d() {
    // Test 2D Step function, piecewise constant with zero gradient everywhere
    let config = DeConfigBuilder::new()
        .seed(35)
        .generations(200)
        .population_size(30)
        .dimension(2)
        .weight_bounds(-5.0, 5.0)
        .mutation_factor(0.8)
        .crossover_rate(0.9)
        .build();

    let report = evolve(step, config).unwrap();

    // the function only takes integer values, so < 1 means the flat
    // global basin was found exactly
    assert!(report.best_fitness < 1.0, "step 2d missed the basin: {}", report.best_fitness);
}
