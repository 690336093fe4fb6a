//! Criterion benchmarks for the Monte Carlo sampler.
//!
//! Benchmarks cover:
//! - Batch throughput across iteration counts
//! - Sequential vs Rayon execution of the same batch
//! - Perturbation model cost

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use scenario_core::prelude::*;
use scenario_engine::mc::MonteCarloSampler;

fn fundamentals() -> Fundamentals {
    Fundamentals {
        starting_arr: 1_000_000.0,
        starting_cash: 2_000_000.0,
        monthly_burn: 100_000.0,
        base_growth_rate: 0.20,
    }
}

fn config(iterations: usize, perturbation: PerturbationModel) -> SimulationConfig {
    SimulationConfig::builder()
        .iterations(iterations)
        .seed(42)
        .perturbation(perturbation)
        .build()
        .expect("valid benchmark config")
}

/// Batch throughput for growing iteration counts.
fn bench_batch_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("monte_carlo_batch");
    let sampler = MonteCarloSampler::default();
    let levers = LeverVector::default();
    let f = fundamentals();

    for iterations in [200, 1_000, 10_000, 100_000] {
        let cfg = config(iterations, PerturbationModel::GrowthOnly);
        group.bench_with_input(BenchmarkId::from_parameter(iterations), &cfg, |b, cfg| {
            b.iter(|| sampler.run_distribution(black_box(&f), black_box(&levers), cfg))
        });
    }
    group.finish();
}

/// Sequential vs parallel execution of one batch.
fn bench_parallel_threshold(c: &mut Criterion) {
    let mut group = c.benchmark_group("parallel_threshold");
    let levers = LeverVector::default();
    let f = fundamentals();
    let cfg = config(50_000, PerturbationModel::GrowthOnly);

    for (label, threshold) in [("sequential", usize::MAX), ("rayon", 1)] {
        let sampler = MonteCarloSampler::default().with_parallel_threshold(threshold);
        group.bench_function(label, |b| {
            b.iter(|| sampler.run_distribution(black_box(&f), black_box(&levers), &cfg))
        });
    }
    group.finish();
}

/// Cost of each perturbation model.
fn bench_perturbation_models(c: &mut Criterion) {
    let mut group = c.benchmark_group("perturbation_model");
    let sampler = MonteCarloSampler::default();
    let levers = LeverVector::default();
    let f = fundamentals();

    for model in [
        PerturbationModel::GrowthOnly,
        PerturbationModel::Fundamentals,
        PerturbationModel::LeverCoupled,
    ] {
        let cfg = config(10_000, model);
        group.bench_function(model.name(), |b| {
            b.iter(|| sampler.run_distribution(black_box(&f), black_box(&levers), &cfg))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_batch_sizes,
    bench_parallel_threshold,
    bench_perturbation_models,
);
criterion_main!(benches);
