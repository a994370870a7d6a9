use antcsp::{CspError, ProblemInstance, Solver, SolverConfig};

fn elitist_config(max_iter: usize, seed: u64) -> SolverConfig {
    SolverConfig::builder()
        .num_ants(20)
        .rho(0.01)
        .seed(seed)
        .max_iter(max_iter)
        .alpha(1.0)
        .beta(2.0)
        .epsilon(0.05)
        .build()
        .unwrap()
}

#[test]
fn test_two_symbol_instance_reaches_the_theoretical_minimum() {
    // For {"000", "111"} every string of length 3 is at distance d from one
    // target and 3 - d from the other, so the total score is always exactly
    // 3; the interesting part is that the max distance converges to 2.
    let instance = ProblemInstance::new(
        vec!['0', '1'],
        vec!["000".to_string(), "111".to_string()],
    )
    .unwrap();

    let mut solver = Solver::new(instance, elitist_config(200, 1234));
    let outcome = solver.solve().unwrap();

    assert_eq!(outcome.score, 3);
    assert_eq!(outcome.min_distance + outcome.max_distance, 3);
    assert!(outcome.max_distance <= 2);
}

#[test]
fn test_elitist_finds_the_min_max_string() {
    // "aaa" is the only string within distance 1 of all three targets.
    let instance = ProblemInstance::new(
        vec!['a', 'b', 'c'],
        vec!["aaa".to_string(), "aab".to_string(), "aba".to_string()],
    )
    .unwrap();

    let mut solver = Solver::new(instance, elitist_config(100, 1234));
    let outcome = solver.solve().unwrap();

    assert_eq!(outcome.solution, "aaa");
    assert_eq!(outcome.max_distance, 1);
    assert_eq!(outcome.score, 2);
}

#[test]
fn test_budget_applies_exactly_n_update_cycles() {
    // All targets identical: the heuristic forces every ant onto "aa",
    // whose max distance is zero, so no deposit is ever made and each
    // update cycle is exactly one multiplicative evaporation. A budget of
    // five must therefore leave every pheromone value at
    // prior * (1 - rho)^5, one factor per iteration except the last.
    let instance = ProblemInstance::new(
        vec!['a', 'b'],
        vec!["aa".to_string(), "aa".to_string()],
    )
    .unwrap();
    let config = SolverConfig::builder()
        .num_ants(4)
        .rho(0.5)
        .seed(1)
        .max_iter(5)
        .alpha(1.0)
        .beta(2.0)
        .epsilon(0.05)
        .build()
        .unwrap();

    let mut solver = Solver::new(instance, config);
    let outcome = solver.solve().unwrap();

    assert_eq!(outcome.solution, "aa");
    assert_eq!(outcome.iterations, 6);

    let expected = 0.5 * (1.0 - 0.5f64).powi(5);
    for position in 0..2 {
        for symbol in 0..2 {
            let pheromone = solver.matrix().pheromone(position, symbol);
            assert!(
                (pheromone - expected).abs() < 1e-12,
                "cell ({}, {}) holds {} but {} evaporation steps should leave {}",
                position,
                symbol,
                pheromone,
                5,
                expected
            );
        }
    }
}

#[test]
fn test_same_seed_reproduces_the_outcome() {
    let instance = ProblemInstance::new(
        vec!['a', 'c', 'g', 't'],
        vec![
            "acgta".to_string(),
            "tgcat".to_string(),
            "aacgt".to_string(),
        ],
    )
    .unwrap();

    let mut first = Solver::new(instance.clone(), elitist_config(50, 7));
    let mut second = Solver::new(instance, elitist_config(50, 7));

    assert_eq!(first.solve().unwrap(), second.solve().unwrap());
}

#[test]
fn test_missing_tunables_fail_before_the_loop_starts() {
    let result = SolverConfig::builder().alpha(1.0).build();
    match result {
        Err(CspError::Configuration(message)) => {
            assert!(message.contains("beta"));
        }
        other => panic!("expected a configuration error, got {:?}", other),
    }
}
