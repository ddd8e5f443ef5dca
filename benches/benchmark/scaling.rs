use crate::common::configure_criterion;
use criterion::{criterion_group, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use valid_rail::validator::constraints;
use valid_rail::{ValidationError, ValidationResult};

pub fn bench_error_accumulation_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("scaling/accumulation");

    for error_count in [1usize, 10, 100, 1000] {
        group.throughput(Throughput::Elements(error_count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(error_count), &error_count, |b, &n| {
            b.iter(|| {
                let result: ValidationResult<Vec<usize>> = (0..n)
                    .map(|i| ValidationResult::invalid(ValidationError::new(format!("error {i}"))))
                    .collect();
                black_box(result)
            })
        });
    }

    group.finish();
}

pub fn bench_collection_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("scaling/collection");
    let positive = constraints::positive::<u64>().each();

    for size in [10usize, 100, 1000, 10_000] {
        let input: Vec<u64> = (1..=size as u64).collect();
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &input, |b, input| {
            b.iter(|| black_box(positive.validate(input.clone())))
        });
    }

    group.finish();
}

criterion_group! {
    name = scaling_benches;
    config = configure_criterion();
    targets = bench_error_accumulation_scaling, bench_collection_scaling,
}
