//! Benchmarks for feature ranking and dashboard construction

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use dropout_dashboard::{
    DashboardConfig, ImportanceEntry, StudyDataset, build_dashboard, rank_top_features,
};

fn synthetic_importances(count: usize) -> Vec<ImportanceEntry> {
    (0..count)
        .map(|i| ImportanceEntry::new(format!("feature_{}", i), ((i * 37) % 101) as f64 / 100.0))
        .collect()
}

fn bench_rank_top_features(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank_top_features");

    for count in [15, 1_000, 100_000] {
        let entries = synthetic_importances(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &entries, |b, entries| {
            b.iter(|| rank_top_features(black_box(entries), black_box(10)))
        });
    }

    group.finish();
}

fn bench_build_dashboard(c: &mut Criterion) {
    let study = StudyDataset::student_dropout();
    let config = DashboardConfig::default();

    c.bench_function("build_dashboard", |b| {
        b.iter(|| build_dashboard(black_box(&study), black_box(&config)))
    });
}

criterion_group!(benches, bench_rank_top_features, bench_build_dashboard);
criterion_main!(benches);
