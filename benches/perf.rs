use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use soccer_insights::correlation::correlation_matrix;
use soccer_insights::dataset::load_matches_from_reader;
use soccer_insights::insights::TeamInsights;
use soccer_insights::periods::{PeriodFilter, aggregate_by_period};
use soccer_insights::sample::sample_matches_seeded;
use soccer_insights::team_view::build_team_view;

const TEAM: &str = "Test FC";

fn bench_dataset_parse(c: &mut Criterion) {
    c.bench_function("dataset_parse", |b| {
        b.iter(|| {
            let records = load_matches_from_reader(black_box(MATCHES_CSV.as_bytes())).unwrap();
            black_box(records.len());
        })
    });
}

fn bench_team_view_build(c: &mut Criterion) {
    let records = sample_matches_seeded(TEAM, 7);
    c.bench_function("team_view_build", |b| {
        b.iter(|| {
            let view = build_team_view(black_box(&records), black_box(TEAM));
            black_box(view.len());
        })
    });
}

fn bench_period_aggregate(c: &mut Criterion) {
    let records = sample_matches_seeded(TEAM, 7);
    let view = build_team_view(&records, TEAM);
    c.bench_function("period_aggregate", |b| {
        b.iter(|| {
            let aggregates = aggregate_by_period(black_box(&view));
            black_box(aggregates.len());
        })
    });
}

fn bench_correlation_matrix(c: &mut Criterion) {
    let records = sample_matches_seeded(TEAM, 7);
    c.bench_function("correlation_matrix", |b| {
        b.iter(|| {
            let matrix = correlation_matrix(black_box(&records));
            black_box(matrix.values.len());
        })
    });
}

fn bench_full_query_pass(c: &mut Criterion) {
    let insights = TeamInsights::new(sample_matches_seeded(TEAM, 7), TEAM);
    c.bench_function("full_query_pass", |b| {
        b.iter(|| {
            let series = insights.time_series(black_box(&PeriodFilter::all()));
            let payload = insights.payload();
            black_box((series.len(), payload.team_view.len()));
        })
    });
}

criterion_group!(
    perf,
    bench_dataset_parse,
    bench_team_view_build,
    bench_period_aggregate,
    bench_correlation_matrix,
    bench_full_query_pass
);
criterion_main!(perf);

static MATCHES_CSV: &str = include_str!("../tests/fixtures/matches.csv");
