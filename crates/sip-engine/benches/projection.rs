use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use sip_engine::{validate, ProjectionCache, Projector};
use sip_model::SipParameters;
use std::hint::black_box;

fn bench_projection_by_horizon(c: &mut Criterion) {
    let projector = Projector::new();
    let mut group = c.benchmark_group("project");

    for years in [1.0, 10.0, 40.0, 100.0] {
        let params = SipParameters::new(5_000.0, 12.0, years);
        group.bench_with_input(BenchmarkId::from_parameter(years), &params, |b, params| {
            b.iter(|| black_box(projector.project(black_box(params))));
        });
    }

    group.finish();
}

fn bench_validate(c: &mut Criterion) {
    let params = SipParameters::new(5_000.0, 12.0, 10.0);
    c.bench_function("validate_strict", |b| {
        b.iter(|| black_box(validate(black_box(&params))));
    });
}

fn bench_cached_projection(c: &mut Criterion) {
    let cache = ProjectionCache::new(64);
    let params = SipParameters::new(5_000.0, 12.0, 40.0);
    cache.get_or_project(&params);

    c.bench_function("project_cached_hit", |b| {
        b.iter(|| black_box(cache.get_or_project(black_box(&params))));
    });
}

criterion_group!(
    benches,
    bench_projection_by_horizon,
    bench_validate,
    bench_cached_projection
);
criterion_main!(benches);
