//! Benchmarks for SMX-RS operations.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rand::distributions::Uniform;
use rand::rngs::StdRng;
use rand::SeedableRng;

use smx_linear::{Mat4, Vec3};
use smx_rotation::Quaternion;

const SAMPLES: usize = 10000;

fn sample_vectors(rng: &mut StdRng) -> Vec<Vec3> {
    let dist = Uniform::new(-10.0f32, 10.0);
    (0..SAMPLES).map(|_| Vec3::sample_from(rng, &dist)).collect()
}

fn sample_unit_quaternions(rng: &mut StdRng) -> Vec<Quaternion> {
    let dist = Uniform::new(-1.0f32, 1.0);
    (0..SAMPLES)
        .map(|_| {
            loop {
                let q = Quaternion::sample_from(rng, &dist);
                let len_sq = q.dot(q);
                if len_sq > 0.1 {
                    let inv = 1.0 / len_sq.sqrt();
                    break Quaternion::new(q.x * inv, q.y * inv, q.z * inv, q.w * inv);
                }
            }
        })
        .collect()
}

/// Benchmark vector arithmetic.
fn bench_vector(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(1);
    let a = sample_vectors(&mut rng);
    let b = sample_vectors(&mut rng);

    let mut group = c.benchmark_group("vector");
    group.throughput(Throughput::Elements(SAMPLES as u64));

    group.bench_function("dot", |bench| {
        bench.iter(|| {
            a.iter()
                .zip(&b)
                .map(|(&x, &y)| black_box(x).dot(black_box(y)))
                .sum::<f32>()
        })
    });

    group.bench_function("cross", |bench| {
        bench.iter(|| {
            a.iter()
                .zip(&b)
                .map(|(&x, &y)| black_box(x).cross(black_box(y)))
                .collect::<Vec<_>>()
        })
    });

    group.bench_function("normal", |bench| {
        bench.iter(|| a.iter().map(|&v| black_box(v).normal()).collect::<Vec<_>>())
    });

    group.finish();
}

/// Benchmark 4x4 matrix operations.
fn bench_matrix(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(2);
    let dist = Uniform::new(-5.0f32, 5.0);
    let a: Vec<Mat4> = (0..SAMPLES).map(|_| Mat4::sample_from(&mut rng, &dist)).collect();
    let b: Vec<Mat4> = (0..SAMPLES).map(|_| Mat4::sample_from(&mut rng, &dist)).collect();

    let mut group = c.benchmark_group("mat4");
    group.throughput(Throughput::Elements(SAMPLES as u64));

    group.bench_function("multiply", |bench| {
        bench.iter(|| {
            a.iter()
                .zip(&b)
                .map(|(&x, &y)| black_box(x) * black_box(y))
                .collect::<Vec<_>>()
        })
    });

    group.bench_function("determinant", |bench| {
        bench.iter(|| a.iter().map(|m| black_box(m).determinant()).sum::<f32>())
    });

    group.bench_function("inverse", |bench| {
        bench.iter(|| a.iter().filter_map(|m| black_box(m).inverse()).count())
    });

    group.finish();
}

/// Benchmark quaternion products and interpolation.
fn bench_quaternion(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(3);
    let a = sample_unit_quaternions(&mut rng);
    let b = sample_unit_quaternions(&mut rng);

    let mut group = c.benchmark_group("quaternion");
    group.throughput(Throughput::Elements(SAMPLES as u64));

    group.bench_function("multiply", |bench| {
        bench.iter(|| {
            a.iter()
                .zip(&b)
                .map(|(&x, &y)| black_box(x) * black_box(y))
                .collect::<Vec<_>>()
        })
    });

    group.bench_function("lerp", |bench| {
        bench.iter(|| {
            a.iter()
                .zip(&b)
                .map(|(&x, &y)| Quaternion::lerp(black_box(x), black_box(y), 0.25))
                .collect::<Vec<_>>()
        })
    });

    group.bench_function("slerp", |bench| {
        bench.iter(|| {
            a.iter()
                .zip(&b)
                .map(|(&x, &y)| Quaternion::slerp(black_box(x), black_box(y), 0.25))
                .collect::<Vec<_>>()
        })
    });

    group.finish();
}

/// Benchmark the fast inverse square root against the libm path.
fn bench_inv_sqrt(c: &mut Criterion) {
    let values: Vec<f32> = (1..=SAMPLES).map(|i| i as f32 * 0.37).collect();

    let mut group = c.benchmark_group("inv_sqrt");
    group.throughput(Throughput::Elements(SAMPLES as u64));

    group.bench_function("estimate_refined", |bench| {
        bench.iter(|| {
            values
                .iter()
                .map(|&v| smx_core::inv_sqrt(black_box(v)))
                .sum::<f32>()
        })
    });

    group.bench_function("std_sqrt", |bench| {
        bench.iter(|| values.iter().map(|&v| 1.0 / black_box(v).sqrt()).sum::<f32>())
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_vector,
    bench_matrix,
    bench_quaternion,
    bench_inv_sqrt
);
criterion_main!(benches);
