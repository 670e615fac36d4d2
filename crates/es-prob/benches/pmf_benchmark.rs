use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use es_prob::{BinomialSimulator, DiscreteSimulator, PoissonSimulator};

fn bench_pmf_tables(c: &mut Criterion) {
    c.bench_function("binomial_n50", |b| {
        b.iter(|| black_box(BinomialSimulator::compute(black_box(50), 0.3).unwrap()))
    });

    c.bench_function("binomial_n100k", |b| {
        b.iter(|| black_box(BinomialSimulator::compute(black_box(100_000), 0.42).unwrap()))
    });

    c.bench_function("poisson_default_rate20", |b| {
        b.iter(|| black_box(PoissonSimulator::compute_default(black_box(20.0)).unwrap()))
    });

    c.bench_function("poisson_default_rate1e4", |b| {
        b.iter(|| black_box(PoissonSimulator::compute_default(black_box(10_000.0)).unwrap()))
    });

    let values: Vec<i64> = (0..1_000).rev().collect();
    let probs = vec![1e-3; 1_000];
    c.bench_function("discrete_table_1k", |b| {
        b.iter(|| black_box(DiscreteSimulator::compute(&values, &probs).unwrap()))
    });
}

criterion_group!(benches, bench_pmf_tables);
criterion_main!(benches);
