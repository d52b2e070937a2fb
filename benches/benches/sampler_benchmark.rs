//! Sampler benchmarks over synthetic libraries.
//!
//! Run with: `cargo bench --package rummy-bench`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rummy_bench::synthetic_days;
use rummy_sample::{DaySampler, Replacement};
use std::hint::black_box;

/// Library sizes, from a light year to a heavy one.
const LIBRARY_SIZES: [usize; 3] = [1_000, 10_000, 100_000];

const SAMPLE_SIZE: usize = 50;

fn weights_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("weights");
    let sampler = DaySampler::default();

    for size in LIBRARY_SIZES {
        let days = synthetic_days(size, 42);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &days, |b, days| {
            b.iter(|| sampler.selection_weights(black_box(days)));
        });
    }

    group.finish();
}

fn sample_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample");

    for size in LIBRARY_SIZES {
        let days = synthetic_days(size, 42);
        group.throughput(Throughput::Elements(size as u64));

        for (name, replacement) in [
            ("with-replacement", Replacement::WithReplacement),
            ("without-replacement", Replacement::WithoutReplacement),
        ] {
            let sampler = DaySampler::new(replacement);
            let mut rng = StdRng::seed_from_u64(7);
            group.bench_with_input(BenchmarkId::new(name, size), &days, |b, days| {
                b.iter(|| sampler.sample_indices(black_box(days), SAMPLE_SIZE, &mut rng));
            });
        }
    }

    group.finish();
}

criterion_group!(benches, weights_benchmark, sample_benchmark);
criterion_main!(benches);
