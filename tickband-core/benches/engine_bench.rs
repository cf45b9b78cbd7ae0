//! Criterion benchmarks for TickBand hot paths.
//!
//! Benchmarks:
//! 1. Full backtest over a synthetic stream (EWMA and window estimators)
//! 2. Estimator update loops in isolation
//! 3. Outlier scan

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use tickband_core::engine::{run_backtest, run_scan};
use tickband_core::estimators::{Estimator, EwmaEstimator, WindowEstimator};
use tickband_core::source::{SyntheticTicks, TickSource};
use tickband_core::validators::{BandRule, Validator};

fn bench_backtest(c: &mut Criterion) {
    let ticks = SyntheticTicks::new(100_000, 42).ticks().unwrap();
    let mut group = c.benchmark_group("backtest");

    group.bench_function(BenchmarkId::new("ewma_band", "100k"), |b| {
        b.iter(|| {
            run_backtest(
                black_box(&ticks),
                Estimator::Ewma(EwmaEstimator::new(0.05)),
                Validator::Band(BandRule::new(2.5)),
            )
            .unwrap()
        })
    });

    group.bench_function(BenchmarkId::new("window_band", "100k"), |b| {
        b.iter(|| {
            run_backtest(
                black_box(&ticks),
                Estimator::Window(WindowEstimator::new(50)),
                Validator::Band(BandRule::new(2.5)),
            )
            .unwrap()
        })
    });

    group.finish();
}

fn bench_estimators(c: &mut Criterion) {
    let ticks = SyntheticTicks::new(100_000, 42).ticks().unwrap();
    let mut group = c.benchmark_group("estimator_update");

    group.bench_function("ewma", |b| {
        b.iter(|| {
            let mut est = EwmaEstimator::new(0.05);
            for tick in &ticks {
                est.update(black_box(tick.price));
            }
            est.stddev()
        })
    });

    group.bench_function("window_50", |b| {
        b.iter(|| {
            let mut est = WindowEstimator::new(50);
            for tick in &ticks {
                est.update(black_box(tick.price));
            }
            est.stddev()
        })
    });

    group.finish();
}

fn bench_scan(c: &mut Criterion) {
    let ticks = SyntheticTicks::new(100_000, 42).ticks().unwrap();
    c.bench_function("scan_ewma_band_100k", |b| {
        b.iter(|| {
            run_scan(
                black_box(&ticks),
                Estimator::Ewma(EwmaEstimator::new(0.05)),
                Validator::Band(BandRule::new(2.5)),
            )
            .unwrap()
        })
    });
}

criterion_group!(benches, bench_backtest, bench_estimators, bench_scan);
criterion_main!(benches);
