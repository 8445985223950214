use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use revkin::prelude::*;

fn setup_parameters(n: usize) -> Vec<ReactionParameters> {
    (0..n)
        .map(|i| ReactionParameters::new(1.0 + (i % 10) as f64, 1.0, 1.0, 0.0).with_grid(5.0, 1000))
        .collect()
}

fn benchmark_simulation(c: &mut Criterion) {
    let model = KineticsModel::with_grid(2.0, 1.0, 1.0, 0.0, 5.0, 1000)
        .expect("Failed to build kinetics model");
    let params = setup_parameters(120);

    c.bench_function("model_construction", |b| {
        b.iter(|| {
            let _ = black_box(KineticsModel::with_grid(
                black_box(2.0),
                black_box(1.0),
                black_box(1.0),
                black_box(0.0),
                5.0,
                1000,
            ));
        });
    });

    c.bench_function("reaction_quotient", |b| {
        b.iter(|| {
            let _ = black_box(model.reaction_quotient());
        });
    });

    c.bench_function("simulate", |b| {
        b.iter(|| {
            let _ = black_box(model.simulate());
        });
    });

    c.bench_function("bulk_simulate", |b| {
        b.iter(|| {
            let _ = black_box(KineticsModel::bulk_simulate(black_box(&params)));
        });
    });
}

criterion_group!(benches, benchmark_simulation);
criterion_main!(benches);
