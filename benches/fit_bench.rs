use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::DVec2;
use sketch_fit::fit::{fit_quadratic, fit_regression};
use sketch_fit::render::{clip_line, sample_parabola};
use sketch_fit::{Gesture, LinearModel, QuadraticModel, ViewportBounds};
use std::hint::black_box;

/// Synthetischer Bogen mit leichtem Zittern, wie eine Freihand-Geste.
fn build_arc_gesture(sample_count: usize) -> Gesture {
    let point_at = |i: usize| {
        let t = i as f64 / (sample_count - 1) as f64;
        let x = -8.0 + 16.0 * t;
        let jitter = ((i * 7919) % 13) as f64 * 0.01;
        DVec2::new(x, -0.1 * x * x + 6.0 + jitter)
    };

    let mut gesture = Gesture::begin(point_at(0));
    for i in 1..sample_count {
        gesture.push(point_at(i));
    }
    gesture
}

fn build_point_cloud(count: usize) -> Vec<DVec2> {
    (0..count)
        .map(|i| {
            let x = (i % 200) as f64 * 0.1 - 10.0;
            let noise = ((i * 31) % 17) as f64 * 0.05 - 0.4;
            DVec2::new(x, 0.5 * x - 1.0 + noise)
        })
        .collect()
}

fn bench_quadratic_fit(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadratic_fit");

    for sample_count in [16usize, 256, 4096] {
        let gesture = build_arc_gesture(sample_count);
        group.bench_with_input(
            BenchmarkId::from_parameter(sample_count),
            &gesture,
            |b, gesture| {
                b.iter(|| fit_quadratic(black_box(gesture)).expect("Fit erwartet"));
            },
        );
    }

    group.finish();
}

fn bench_regression_fit(c: &mut Criterion) {
    let mut group = c.benchmark_group("regression_fit");

    for count in [10usize, 1_000, 100_000] {
        let points = build_point_cloud(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &points, |b, points| {
            b.iter(|| fit_regression(black_box(points)).expect("Fit erwartet"));
        });
    }

    group.finish();
}

fn bench_parabola_sampling(c: &mut Criterion) {
    let bounds = ViewportBounds::symmetric(10.0);
    let model = QuadraticModel {
        a: -0.1,
        b: 0.3,
        c: 6.0,
    };

    let mut group = c.benchmark_group("parabola_sampling");
    for step in [0.1f64, 0.01, 0.001] {
        group.bench_with_input(BenchmarkId::from_parameter(step), &step, |b, &step| {
            b.iter(|| black_box(sample_parabola(&model, black_box(&bounds), step).len()));
        });
    }
    group.finish();
}

fn bench_line_clipping(c: &mut Criterion) {
    let bounds = ViewportBounds::symmetric(10.0);
    let lines: Vec<LinearModel> = (0..64)
        .map(|i| LinearModel {
            slope: (i as f64 - 32.0) * 0.37,
            intercept: (i % 9) as f64 - 4.0,
        })
        .collect();

    c.bench_function("clip_line_batch_64", |b| {
        b.iter(|| {
            lines
                .iter()
                .map(|line| clip_line(black_box(line), &bounds, 0.0).len())
                .sum::<usize>()
        })
    });
}

criterion_group!(
    benches,
    bench_line_clipping,
    bench_quadratic_fit,
    bench_regression_fit,
    bench_parabola_sampling
);
criterion_main!(benches);
