use crate::common::{age_validator, configure_criterion, validate_email};
use criterion::{criterion_group, Criterion};
use std::hint::black_box;
use valid_rail::{ValidationConfig, ValidationResult};

pub fn bench_collect_realistic(c: &mut Criterion) {
    let test_emails = vec![
        "user1@company.com",
        "invalid-email",
        "user3@company.com",
        "user4@company.com",
        "another-invalid",
        "user6@company.com",
        "user7@company.com",
        "bad-email-format",
        "user9@company.com",
        "user10@company.com",
    ];

    let mut group = c.benchmark_group("validation");

    group.bench_function("collect_realistic_mixed", |b| {
        b.iter(|| {
            let result: ValidationResult<Vec<String>> =
                test_emails.iter().map(|email| validate_email(email)).collect();
            black_box(&result);
        })
    });

    group.bench_function("manual_collect_realistic_mixed", |b| {
        b.iter(|| {
            let mut values = Vec::new();
            let mut errors = Vec::new();
            for email in &test_emails {
                match validate_email(email) {
                    ValidationResult::Valid(v) => values.push(v),
                    ValidationResult::Invalid(e) => errors.push(e),
                }
            }
            black_box((&values, &errors));
        })
    });

    group.bench_function("zip_three_fields", |b| {
        let ages = age_validator();
        b.iter(|| {
            let result = validate_email(black_box("ada@example.com"))
                .zip(ages.validate(black_box(36)))
                .zip(validate_email(black_box("broken")));
            black_box(&result);
        })
    });

    group.finish();
}

pub fn bench_sequence_validator(c: &mut Criterion) {
    let ages = age_validator().each();
    let input: Vec<i32> = (0..200).map(|i| if i % 10 == 0 { -i } else { i % 100 }).collect();
    let strict = ValidationConfig::strict();

    let mut group = c.benchmark_group("validation/sequence");

    group.bench_function("each_200_unlimited", |b| {
        b.iter(|| black_box(ages.validate(black_box(input.clone()))))
    });

    group.bench_function("each_200_strict", |b| {
        b.iter(|| black_box(ages.validate_with(black_box(input.clone()), &strict)))
    });

    group.finish();
}

criterion_group! {
    name = validation_benches;
    config = configure_criterion();
    targets = bench_collect_realistic, bench_sequence_validator,
}
