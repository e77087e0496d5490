//! Benchmarks for support table resolution and rendering.

use chrono::{Duration, NaiveDate};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use release_support::reports::{create_reporter_with_options, ReportConfig, ReportFormat};
use release_support::{FixedClock, ReleaseCatalog, ReleaseRecord, VersionSupportCalculator};
use std::hint::black_box;

fn synthetic_catalog(len: usize) -> Vec<ReleaseRecord> {
    let start = NaiveDate::from_ymd_opt(2010, 1, 1).unwrap();
    (0..len)
        .map(|i| {
            let released = start + Duration::days(i as i64 * 45);
            ReleaseRecord::new(format!("v{}.{}", i / 10, i % 10), &released.to_string())
        })
        .collect()
}

fn calculator() -> VersionSupportCalculator<FixedClock> {
    let today = NaiveDate::from_ymd_opt(2025, 4, 1).unwrap();
    VersionSupportCalculator::with_clock(FixedClock::at_date(today))
}

fn bench_resolve(c: &mut Criterion) {
    let calculator = calculator();
    let mut group = c.benchmark_group("resolve");
    for len in [20, 200, 2000] {
        let records = synthetic_catalog(len);
        group.bench_with_input(BenchmarkId::from_parameter(len), &records, |b, records| {
            b.iter(|| calculator.render(black_box(records)));
        });
    }
    group.finish();
}

fn bench_reports(c: &mut Criterion) {
    let table = calculator().render(&ReleaseCatalog::builtin().releases);
    let config = ReportConfig::default();
    let mut group = c.benchmark_group("report");
    for format in [
        ReportFormat::Html,
        ReportFormat::Markdown,
        ReportFormat::Json,
        ReportFormat::Table,
    ] {
        let reporter = create_reporter_with_options(format, false);
        group.bench_function(format.to_string(), |b| {
            b.iter(|| reporter.generate(black_box(&table), &config));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_resolve, bench_reports);
criterion_main!(benches);
