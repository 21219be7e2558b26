//! Benchmark for Sequence set algebra.
//!
//! `distinct`, `union`, `intersect` and `except` only require equality on
//! the element type, so their cost grows with the square of the input.
//! The `HashSet` rows show what a hashing implementation would achieve.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use enumerable::prelude::*;
use std::collections::HashSet;
use std::hint::black_box;

fn overlapping_pair(size: i32) -> (Sequence<i32>, Sequence<i32>) {
    let left = (0..size).map(|element| element % (size / 2)).collect();
    let right = (size / 4..size + size / 4).collect();
    (left, right)
}

// =============================================================================
// distinct Benchmark
// =============================================================================

fn benchmark_distinct(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("distinct");

    for size in [100, 500, 2000] {
        let (sequence, _) = overlapping_pair(size);

        group.bench_with_input(BenchmarkId::new("Sequence", size), &size, |bencher, _| {
            bencher.iter(|| black_box(&sequence).distinct());
        });

        group.bench_with_input(BenchmarkId::new("HashSet", size), &size, |bencher, _| {
            bencher.iter(|| {
                let mut seen = HashSet::new();
                black_box(&sequence)
                    .iter()
                    .filter(|element| seen.insert(**element))
                    .copied()
                    .collect::<Vec<_>>()
            });
        });
    }

    group.finish();
}

// =============================================================================
// union / intersect / except Benchmark
// =============================================================================

fn benchmark_binary_operations(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("set_algebra");

    for size in [100, 500, 2000] {
        let (left, right) = overlapping_pair(size);

        group.bench_with_input(BenchmarkId::new("union", size), &size, |bencher, _| {
            bencher.iter(|| black_box(&left).union(black_box(&right)));
        });

        group.bench_with_input(BenchmarkId::new("intersect", size), &size, |bencher, _| {
            bencher.iter(|| black_box(&left).intersect(black_box(&right)));
        });

        group.bench_with_input(BenchmarkId::new("except", size), &size, |bencher, _| {
            bencher.iter(|| black_box(&left).except(black_box(&right)));
        });
    }

    group.finish();
}

// =============================================================================
// Criterion Group and Main
// =============================================================================

criterion_group!(benches, benchmark_distinct, benchmark_binary_operations);

criterion_main!(benches);
