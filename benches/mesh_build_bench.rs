//! Benchmarks for mesh construction.
//!
//! Run with: `cargo bench --bench mesh_build_bench`
//!
//! Measures the corner-interpolation phase in isolation and the full
//! structured-to-unstructured pipeline across grid sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use gridmesh::{interpolate_corners, GridAxes, MeshBuilder};

/// Separable axes for an `n x n` grid with mildly irregular spacing.
fn generate_axes(n: usize) -> GridAxes {
    let lons: Vec<f64> = (0..n).map(|i| 0.25 * i as f64 + 1e-3 * (i % 7) as f64).collect();
    let lats: Vec<f64> = (0..n)
        .map(|j| -60.0 + 0.25 * j as f64 + 1e-3 * (j % 5) as f64)
        .collect();
    GridAxes::separable(lons, lats).unwrap()
}

fn bench_corner_interpolation(c: &mut Criterion) {
    let mut group = c.benchmark_group("corner_interpolation");

    for &n in &[32usize, 128, 512] {
        let axes = generate_axes(n);
        let (lon2d, lat2d) = axes.center_fields();

        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| interpolate_corners(black_box(&lon2d), black_box(&lat2d)));
        });
    }

    group.finish();
}

fn bench_full_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("mesh_build");
    group.sample_size(20);

    for &n in &[32usize, 128, 512] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                let mesh = MeshBuilder::new(generate_axes(n)).build().unwrap();
                black_box(mesh.node_count())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_corner_interpolation, bench_full_build);
criterion_main!(benches);
