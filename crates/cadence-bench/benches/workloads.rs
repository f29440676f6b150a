//! Criterion cross-check of the demonstration workloads, so harness
//! numbers can be compared against an independent measurement.

use std::hint::black_box;

use cadence_bench::{
    fib_iterative, fib_naive, grow_vec, prealloc_vec, random_values, sum_indexed, sum_iter,
};
use criterion::{criterion_group, criterion_main, Criterion};

fn bench_summation(c: &mut Criterion) {
    let data = random_values(100_000, 42);
    let mut group = c.benchmark_group("summation_100k");
    group.bench_function("indexed", |b| b.iter(|| sum_indexed(black_box(&data))));
    group.bench_function("iter", |b| b.iter(|| sum_iter(black_box(&data))));
    group.finish();
}

fn bench_allocation(c: &mut Criterion) {
    let mut group = c.benchmark_group("allocation_100k");
    group.bench_function("grow", |b| b.iter(|| grow_vec(black_box(100_000))));
    group.bench_function("prealloc", |b| b.iter(|| prealloc_vec(black_box(100_000))));
    group.finish();
}

fn bench_fibonacci(c: &mut Criterion) {
    let mut group = c.benchmark_group("fibonacci_20");
    group.bench_function("naive", |b| b.iter(|| fib_naive(black_box(20))));
    group.bench_function("iterative", |b| b.iter(|| fib_iterative(black_box(20))));
    group.finish();
}

criterion_group!(benches, bench_summation, bench_allocation, bench_fibonacci);
criterion_main!(benches);
