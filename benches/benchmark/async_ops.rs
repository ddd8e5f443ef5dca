use crate::common::{configure_criterion, UserData};
use criterion::{criterion_group, Criterion};
use std::hint::black_box;
use tokio::runtime::Runtime;
use valid_rail::prelude_async::*;

pub fn bench_async_validator(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let mut group = c.benchmark_group("async/validator");

    let lifted = AsyncValidator::from_sync(constraints::non_negative::<i64>()).each();
    let direct = AsyncValidator::from_fn(|items: Vec<i64>| async move { ValidationResult::valid(items) });
    let input: Vec<i64> = (0..100).collect();

    group.bench_function("lifted_each_100", |b| {
        b.iter(|| rt.block_on(async { black_box(lifted.validate(input.clone()).await) }))
    });

    group.bench_function("pass_through_100", |b| {
        b.iter(|| rt.block_on(async { black_box(direct.validate(input.clone()).await) }))
    });

    group.bench_function("validate_all_async_10", |b| {
        b.iter(|| {
            rt.block_on(async {
                let checks = (0..10i64).map(|i| lifted.validate(vec![i - 5]));
                black_box(validate_all_async(checks).await)
            })
        })
    });

    group.finish();
}

pub fn bench_sync_vs_async_record(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let mut group = c.benchmark_group("async/record");
    let records = AsyncValidator::<Vec<UserData>>::from_sync(Validator::of());

    group.bench_function("sync_batch_100", |b| {
        let batch: Vec<UserData> = (0..100).map(UserData::mixed).collect();
        b.iter(|| black_box(batch.clone().validate()))
    });

    group.bench_function("lifted_batch_100", |b| {
        let batch: Vec<UserData> = (0..100).map(UserData::mixed).collect();
        b.iter(|| rt.block_on(async { black_box(records.validate(batch.clone()).await) }))
    });

    group.finish();
}

criterion_group! {
    name = async_ops_benches;
    config = configure_criterion();
    targets = bench_async_validator, bench_sync_vs_async_record,
}
