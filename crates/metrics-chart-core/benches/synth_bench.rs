use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use metrics_chart_core::{nearest, synthesize, LinePath, MetricKind, ScaleMapper, SeededRng, ViewportGeometry, DEFAULT_TOLERANCE_PX};

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("series_pipeline");
    let geometry = ViewportGeometry::default();
    for &days in &[30u32, 365, 5_000] {
        group.bench_with_input(BenchmarkId::from_parameter(format!("d{days}")), &days, |b, &d| {
            let mut rng = SeededRng::new(1);
            b.iter(|| {
                let series = synthesize(MetricKind::Impressions, d, &mut rng);
                let scaled = ScaleMapper::new(geometry, &series).scale_points(&series);
                black_box(LinePath::build(&scaled).to_svg_d());
            });
        });
    }
    group.finish();
}

fn bench_hit(c: &mut Criterion) {
    let geometry = ViewportGeometry::default();
    let series = synthesize(MetricKind::Clicks, 5_000, &mut SeededRng::new(2));
    let scaled = ScaleMapper::new(geometry, &series).scale_points(&series);
    c.bench_function("nearest_5000", |b| {
        let mut x = 80.0;
        b.iter(|| {
            x = if x > 740.0 { 80.0 } else { x + 0.37 };
            black_box(nearest(x, &scaled, DEFAULT_TOLERANCE_PX));
        });
    });
}

criterion_group!(benches, bench_pipeline, bench_hit);
criterion_main!(benches);
