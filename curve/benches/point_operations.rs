use criterion::{black_box, criterion_group, criterion_main, Criterion};
use curve::{Curve, Jacobian};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_jacobian_dbl(c: &mut Criterion) {
    let curve = Curve::secp256k1();
    let mut rng = StdRng::seed_from_u64(42);
    let p = curve.random_point(&mut rng);

    c.bench_function("jacobian_dbl", |bencher| {
        bencher.iter(|| black_box(black_box(&p).dbl(&curve)))
    });
}

fn bench_jacobian_dbl_z_one(c: &mut Criterion) {
    let curve = Curve::secp256k1();
    let p = curve.generator().to_jacobian(&curve);

    c.bench_function("jacobian_dbl_z_one", |bencher| {
        bencher.iter(|| black_box(black_box(&p).dbl(&curve)))
    });
}

fn bench_jacobian_add(c: &mut Criterion) {
    let curve = Curve::secp256k1();
    let mut rng = StdRng::seed_from_u64(42);
    let p = curve.random_point(&mut rng);
    let q = curve.random_point(&mut rng);

    c.bench_function("jacobian_add", |bencher| {
        bencher.iter(|| black_box(black_box(&p).add(&curve, black_box(&q))))
    });
}

fn bench_jacobian_mixed_add(c: &mut Criterion) {
    let curve = Curve::secp256k1();
    let mut rng = StdRng::seed_from_u64(42);
    let p = curve.random_point(&mut rng);
    let q = curve.random_point(&mut rng).to_affine(&curve);

    c.bench_function("jacobian_mixed_add", |bencher| {
        bencher.iter(|| black_box(black_box(&p).mixed_add(&curve, black_box(&q))))
    });
}

fn bench_to_affine(c: &mut Criterion) {
    let curve = Curve::secp256k1();
    let mut rng = StdRng::seed_from_u64(42);
    let p = curve.random_point(&mut rng);

    c.bench_function("jacobian_to_affine", |bencher| {
        bencher.iter(|| black_box(black_box(&p).to_affine(&curve)))
    });
}

fn bench_scalar_mul(c: &mut Criterion) {
    let curve = Curve::secp256k1();
    let mut rng = StdRng::seed_from_u64(42);
    let g: Jacobian = curve.generator().to_jacobian(&curve);
    let k = curve.random_scalar(&mut rng);

    c.bench_function("jacobian_scalar_mul", |bencher| {
        bencher.iter(|| black_box(black_box(&g).mul(&curve, black_box(&k))))
    });
}

criterion_group!(
    benches,
    bench_jacobian_dbl,
    bench_jacobian_dbl_z_one,
    bench_jacobian_add,
    bench_jacobian_mixed_add,
    bench_to_affine,
    bench_scalar_mul
);
criterion_main!(benches);
