use criterion::{black_box, criterion_group, criterion_main, Criterion};
use forex_management::{
    doctype::TransactionRecord,
    rate::{assign_exchange_rate, RateBand, RngSource},
    report::{ReportRegistry, TOP_CURRENCIES},
    types::TransactionType,
};
use rust_decimal::Decimal;

fn benchmark_rate_assignment(c: &mut Criterion) {
    let band = RateBand::default();
    let mut source = RngSource::seeded(42);

    c.bench_function("assign_exchange_rate", |b| {
        b.iter(|| {
            let record = TransactionRecord::new(
                "Abebe",
                "US Dollar (USD)",
                TransactionType::Buy,
                Decimal::from(100),
            );
            black_box(assign_exchange_rate(record, &band, &mut source));
        });
    });
}

fn benchmark_filter_validation(c: &mut Criterion) {
    let registry = ReportRegistry::builtin().unwrap();
    let report = registry.get(TOP_CURRENCIES).unwrap();

    c.bench_function("validate_top_currencies", |b| {
        b.iter(|| {
            black_box(report.validate([
                ("currency", "US Dollar (USD)"),
                ("transaction_type", "Sell"),
                ("from_date", "2025-01-01"),
                ("to_date", "2025-01-31 23:59:59"),
            ]))
        });
    });
}

fn benchmark_builtin_registry(c: &mut Criterion) {
    c.bench_function("builtin_registry", |b| {
        b.iter(|| black_box(ReportRegistry::builtin()));
    });
}

criterion_group!(
    benches,
    benchmark_rate_assignment,
    benchmark_filter_validation,
    benchmark_builtin_registry
);
criterion_main!(benches);
