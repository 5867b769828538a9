//! Benchmark for ImmutableList vs standard Vec.
//!
//! Compares the fold-derived operations of ImmutableList against the
//! equivalent iterator pipelines over a plain `Vec`.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use idealist::{ImmutableList, IndexedFold};
use std::hint::black_box;

// =============================================================================
// map/filter Benchmark
// =============================================================================

fn benchmark_map_filter(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("map_filter");

    for size in [100, 1000, 10000] {
        let immutable_list: ImmutableList<i64> = ImmutableList::range_exclusive(0, size);
        let standard_vec: Vec<i64> = (0..size).collect();

        group.bench_with_input(
            BenchmarkId::new("ImmutableList", size),
            &size,
            |bencher, _| {
                bencher.iter(|| {
                    let result = immutable_list
                        .map(|element| element * 3)
                        .filter(|element| element % 2 == 0);
                    black_box(result)
                });
            },
        );

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |bencher, _| {
            bencher.iter(|| {
                let result: Vec<i64> = standard_vec
                    .iter()
                    .map(|element| element * 3)
                    .filter(|element| element % 2 == 0)
                    .collect();
                black_box(result)
            });
        });
    }

    group.finish();
}

// =============================================================================
// sort_by Benchmark
// =============================================================================

fn benchmark_sort_by(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("sort_by");

    for size in [100, 1000, 10000] {
        // Descending input so every element moves
        let immutable_list = ImmutableList::range_exclusive(0, size).reversed();
        let standard_vec: Vec<i64> = (0..size).rev().collect();

        group.bench_with_input(
            BenchmarkId::new("ImmutableList", size),
            &size,
            |bencher, _| {
                bencher.iter(|| black_box(immutable_list.sort_by(|element| element % 97)));
            },
        );

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |bencher, _| {
            bencher.iter(|| {
                let mut sorted = standard_vec.clone();
                sorted.sort_by_key(|element| element % 97);
                black_box(sorted)
            });
        });
    }

    group.finish();
}

// =============================================================================
// unique Benchmark
// =============================================================================

fn benchmark_unique(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("unique");

    // Quadratic scan, so sizes stay small
    for size in [100, 500, 2000] {
        let immutable_list = ImmutableList::range_exclusive(0, size).map(|element| element % 50);

        group.bench_with_input(
            BenchmarkId::new("ImmutableList", size),
            &size,
            |bencher, _| {
                bencher.iter(|| black_box(immutable_list.unique()));
            },
        );
    }

    group.finish();
}

// =============================================================================
// zip Benchmark
// =============================================================================

fn benchmark_zip(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("zip");

    for size in [100, 1000, 10000] {
        let left = ImmutableList::range_exclusive(0, size);
        let right = left.map(|element| element.to_string());

        group.bench_with_input(
            BenchmarkId::new("ImmutableList", size),
            &size,
            |bencher, _| {
                bencher.iter(|| black_box(left.zip(right.iter().cloned())));
            },
        );
    }

    group.finish();
}

// =============================================================================
// Query Benchmark (short-circuit vs full fold)
// =============================================================================

fn benchmark_queries(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("queries");

    for size in [1000, 10000] {
        let immutable_list = ImmutableList::range_exclusive(0, size);

        group.bench_with_input(
            BenchmarkId::new("any_early_hit", size),
            &size,
            |bencher, _| {
                bencher.iter(|| black_box(immutable_list.any(|element| *element == 3)));
            },
        );

        group.bench_with_input(BenchmarkId::new("sum_of", size), &size, |bencher, _| {
            bencher.iter(|| black_box(immutable_list.sum_of(|element| *element)));
        });

        group.bench_with_input(BenchmarkId::new("max_by", size), &size, |bencher, _| {
            bencher.iter(|| black_box(immutable_list.max_by(|element| element % 1013)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_map_filter,
    benchmark_sort_by,
    benchmark_unique,
    benchmark_zip,
    benchmark_queries
);

criterion_main!(benches);
