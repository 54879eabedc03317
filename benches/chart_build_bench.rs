use criterion::{Criterion, criterion_group, criterion_main};
use sparkline_rs::api::{ChartType, Dispatcher, PlotRequest, StyleConfig};
use sparkline_rs::core::{NormalizedSeries, ValueScale, Welford};
use sparkline_rs::render::EstimatedTextMetrics;
use std::hint::black_box;

fn series(len: usize) -> Vec<f64> {
    (0..len)
        .map(|i| {
            let t = i as f64;
            100.0 + (t * 0.13).sin() * 40.0 + t * 0.02
        })
        .collect()
}

fn bench_normalize_10k(c: &mut Criterion) {
    let samples = series(10_000);

    c.bench_function("normalize_10k", |b| {
        b.iter(|| {
            let _ = NormalizedSeries::new(black_box(&samples), ValueScale::Normalized)
                .expect("normalize");
        })
    });
}

fn bench_welford_10k(c: &mut Criterion) {
    let samples = series(10_000);

    c.bench_function("welford_10k", |b| {
        b.iter(|| {
            let acc: Welford = black_box(&samples).iter().copied().collect();
            black_box(acc.population_variance())
        })
    });
}

fn bench_labeled_smooth_frame(c: &mut Criterion) {
    let samples = series(200);
    let dispatcher = Dispatcher::new(EstimatedTextMetrics);
    let config = StyleConfig::new(ChartType::Smooth)
        .with_markers(true, true, true)
        .with_std_dev_band(true)
        .with_label("Glucose");

    c.bench_function("labeled_smooth_frame_200", |b| {
        b.iter(|| {
            let _ = dispatcher
                .build(black_box(&samples), black_box(&config))
                .expect("frame");
        })
    });
}

fn bench_mixed_batch(c: &mut Criterion) {
    let requests: Vec<PlotRequest> = (0..256)
        .map(|i| {
            let chart_type = [ChartType::Area, ChartType::Bar, ChartType::Discrete][i % 3];
            PlotRequest::new(series(64), StyleConfig::new(chart_type))
        })
        .collect();
    let dispatcher = Dispatcher::new(EstimatedTextMetrics);

    c.bench_function("mixed_batch_256", |b| {
        b.iter(|| {
            let frames = dispatcher.build_batch(black_box(&requests));
            black_box(frames.len())
        })
    });
}

criterion_group!(
    benches,
    bench_normalize_10k,
    bench_welford_10k,
    bench_labeled_smooth_frame,
    bench_mixed_batch
);
criterion_main!(benches);
