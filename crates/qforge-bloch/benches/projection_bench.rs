//! Benchmarks for Bloch projection and scene construction
//!
//! Run with: cargo bench -p qforge-bloch

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use num_complex::Complex64;
use qforge_bloch::{
    BlochScene, OrbitCamera, QubitSelector, SceneOptions, StateInput, TwoQubitState, render_svg,
};

/// Benchmark each input kind through the resolver
fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");
    let h = std::f64::consts::FRAC_1_SQRT_2;

    let pure = StateInput::new().with_amplitudes(Complex64::new(h, 0.0), Complex64::new(0.0, h));
    group.bench_function("amplitudes", |b| b.iter(|| black_box(&pure).resolve()));

    let bell = TwoQubitState::new(
        [
            Complex64::new(h, 0.0),
            Complex64::new(0.0, 0.0),
            Complex64::new(0.0, 0.0),
            Complex64::new(h, 0.0),
        ],
        QubitSelector::Second,
    );
    let reduced = StateInput::new().with_statevector(bell);
    group.bench_function("statevector", |b| b.iter(|| black_box(&reduced).resolve()));

    group.finish();
}

/// Benchmark scene building and SVG output at several viewport sizes
fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    let vector = StateInput::new().resolve();

    group.bench_function("scene", |b| {
        b.iter(|| BlochScene::new(black_box(vector), SceneOptions::default()));
    });

    let scene = BlochScene::new(vector, SceneOptions::default());
    let camera = OrbitCamera::default();
    for size in &[160_u32, 320, 640] {
        group.bench_with_input(BenchmarkId::new("svg", size), size, |b, &s| {
            b.iter(|| render_svg(black_box(&scene), &camera, s, s));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_resolve, bench_render);
criterion_main!(benches);
