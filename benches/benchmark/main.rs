use criterion::criterion_main;

mod async_ops;
mod scaling;
mod validation;

criterion_main!(
    validation::validation_benches,
    records::record_benches,
    scaling::scaling_benches,
    async_ops::async_ops_benches,
);
