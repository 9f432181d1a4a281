//! Benchmarks comparing clock query overhead and delay strategies.
//!
//! Delay accuracy is highly platform-dependent; run this on the deployment target
//! before relying on a particular precision.

#![expect(missing_docs, reason = "benchmarks do not require API documentation")]

use std::hint::black_box;
use std::time::Instant;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use precision_timer::{DelayStrategy, PrecisionTimer, TimerPrecision};

/// Benchmark group comparing elapsed-time query overhead.
fn elapsed_query_comparison(c: &mut Criterion) {
    let mut group = c.benchmark_group("elapsed_query");

    let mut timer = PrecisionTimer::with_precision(TimerPrecision::Nanosecond);

    // Baseline: querying the standard library clock.
    group.bench_with_input(BenchmarkId::new("std_instant", "elapsed"), &(), |b, ()| {
        let start = Instant::now();
        b.iter(|| {
            black_box(start.elapsed());
        });
    });

    group.bench_with_input(
        BenchmarkId::new("precision_timer", "elapsed"),
        &(),
        |b, ()| {
            b.iter(|| {
                black_box(timer.elapsed());
            });
        },
    );

    group.finish();
}

/// Benchmark group measuring short delays under each strategy.
fn delay_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("delay");

    let mut timer = PrecisionTimer::with_precision(TimerPrecision::Microsecond);

    group.bench_with_input(BenchmarkId::new("spin", "10us"), &(), |b, ()| {
        b.iter(|| {
            timer.delay(10, DelayStrategy::Spin);
        });
    });

    // Below the sleep threshold, so this exercises the spin fallback of Sleep.
    group.bench_with_input(BenchmarkId::new("sleep", "10us"), &(), |b, ()| {
        b.iter(|| {
            timer.delay(10, DelayStrategy::Sleep);
        });
    });

    // Above the threshold: the OS scheduler takes part.
    group.bench_with_input(BenchmarkId::new("sleep", "2ms"), &(), |b, ()| {
        b.iter(|| {
            timer.delay(2_000, DelayStrategy::Sleep);
        });
    });

    group.finish();
}

criterion_group!(benches, elapsed_query_comparison, delay_strategies);
criterion_main!(benches);
