use criterion::{black_box, criterion_group, criterion_main, Criterion};

use antcsp::{Algorithm, ProblemInstance, Solver, SolverConfig};

fn build_instance(num_targets: usize, string_len: usize) -> ProblemInstance {
    let alphabet = vec!['a', 'c', 'g', 't'];
    let targets = (0..num_targets)
        .map(|i| {
            (0..string_len)
                .map(|j| alphabet[(i * 7 + j * 3 + i * j) % alphabet.len()])
                .collect()
        })
        .collect();
    ProblemInstance::new(alphabet, targets).unwrap()
}

fn bench_elitist(c: &mut Criterion) {
    let mut group = c.benchmark_group("elitist_solver");
    for size in [8, 32].iter() {
        group.bench_function(&format!("elitist_{}_targets", size), |b| {
            let instance = build_instance(*size, 20);
            b.iter(|| {
                let config = SolverConfig::builder()
                    .num_ants(20)
                    .rho(0.01)
                    .seed(1234)
                    .max_iter(50)
                    .alpha(1.0)
                    .beta(2.0)
                    .epsilon(0.05)
                    .build()
                    .unwrap();
                let mut solver = Solver::new(black_box(instance.clone()), config);
                solver.solve().unwrap()
            })
        });
    }
    group.finish();
}

fn bench_minmax(c: &mut Criterion) {
    let mut group = c.benchmark_group("minmax_solver");
    for ants in [20, 100].iter() {
        group.bench_function(&format!("minmax_{}_ants", ants), |b| {
            let instance = build_instance(16, 20);
            b.iter(|| {
                let config = SolverConfig::builder()
                    .algorithm(Algorithm::MinMax)
                    .num_ants(*ants)
                    .rho(0.001)
                    .seed(1234)
                    .max_iter(50)
                    .build()
                    .unwrap();
                let mut solver = Solver::new(black_box(instance.clone()), config);
                solver.solve().unwrap()
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_elitist, bench_minmax);
criterion_main!(benches);
