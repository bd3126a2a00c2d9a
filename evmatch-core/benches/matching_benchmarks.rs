//! Performance benchmarks for segmentation and matching
//!
//! Run with: cargo bench --bench matching_benchmarks

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use evmatch_core::{evaluate, segment, ExecutorConfig, IouThreshold, Label};
use std::hint::black_box;

/// Generate a label stream that cycles through four event types with
/// varying event lengths, plus a shifted copy acting as the prediction
fn generate_pair(samples: usize) -> (Vec<Label>, Vec<Label>) {
    let mut gt = Vec::with_capacity(samples);
    let mut event = 0usize;
    while gt.len() < samples {
        let label = (event % 4) as Label;
        let length = 5 + (event * 7) % 40;
        gt.extend(std::iter::repeat(label).take(length));
        event += 1;
    }
    gt.truncate(samples);

    let mut pred = gt.clone();
    pred.rotate_right(3);
    (gt, pred)
}

fn bench_segmentation(c: &mut Criterion) {
    let mut group = c.benchmark_group("segmentation");

    for size in [1_000, 100_000, 1_000_000] {
        let (gt, _) = generate_pair(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("segment", size), &gt, |b, gt| {
            b.iter(|| segment(black_box(gt)).unwrap());
        });
    }

    group.finish();
}

fn bench_execution_modes(c: &mut Criterion) {
    let mut group = c.benchmark_group("execution_modes");
    let (gt, pred) = generate_pair(1_000_000);

    let modes = [
        ("sequential", ExecutorConfig::sequential()),
        ("parallel", ExecutorConfig::parallel(None)),
        ("adaptive", ExecutorConfig::default()),
    ];

    group.throughput(Throughput::Elements(gt.len() as u64));
    for (name, config) in modes {
        group.bench_function(name, |b| {
            b.iter(|| {
                evaluate(
                    black_box(&gt),
                    black_box(&pred),
                    None,
                    IouThreshold::DEFAULT,
                    &config,
                )
                .unwrap()
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_segmentation, bench_execution_modes);
criterion_main!(benches);
