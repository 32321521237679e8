use criterion::{black_box, criterion_group, criterion_main, Criterion};
use num_bigint::BigUint;
use num_traits::Num;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use reduction::{random_below, Montgomery, Reduction, ReductionContext};

fn secp256k1_order() -> BigUint {
    BigUint::from_str_radix(
        "fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141",
        16,
    )
    .unwrap()
}

fn bench_k256_reduce(c: &mut Criterion) {
    let ctx = ReductionContext::k256();
    let mut rng = StdRng::seed_from_u64(42);
    let mut bytes = [0u8; 64];
    rng.fill_bytes(&mut bytes);
    let value = BigUint::from_bytes_le(&bytes);

    c.bench_function("k256_reduce_512_bit", |bencher| {
        bencher.iter(|| black_box(ctx.reduce(black_box(value.clone()))))
    });
}

fn bench_generic_reduce(c: &mut Criterion) {
    let ctx = ReductionContext::new(secp256k1_order()).unwrap();
    let mut rng = StdRng::seed_from_u64(42);
    let mut bytes = [0u8; 64];
    rng.fill_bytes(&mut bytes);
    let value = BigUint::from_bytes_le(&bytes);

    c.bench_function("generic_reduce_512_bit", |bencher| {
        bencher.iter(|| black_box(ctx.reduce(black_box(value.clone()))))
    });
}

fn bench_field_mul(c: &mut Criterion) {
    let ctx = ReductionContext::k256();
    let mut rng = StdRng::seed_from_u64(42);
    let a = ctx.convert_to(&random_below(&mut rng, ctx.modulus()));
    let b = ctx.convert_to(&random_below(&mut rng, ctx.modulus()));

    c.bench_function("k256_mul", |bencher| {
        bencher.iter(|| black_box(ctx.mul(black_box(&a), black_box(&b))))
    });
}

fn bench_montgomery_mul(c: &mut Criterion) {
    let mont = Montgomery::new(secp256k1_order()).unwrap();
    let mut rng = StdRng::seed_from_u64(42);
    let a = mont.convert_to(&random_below(&mut rng, mont.modulus()));
    let b = mont.convert_to(&random_below(&mut rng, mont.modulus()));

    c.bench_function("montgomery_mul", |bencher| {
        bencher.iter(|| black_box(mont.mul(black_box(&a), black_box(&b))))
    });
}

fn bench_field_pow(c: &mut Criterion) {
    let ctx = ReductionContext::k256();
    let mut rng = StdRng::seed_from_u64(42);
    let a = ctx.convert_to(&random_below(&mut rng, ctx.modulus()));
    let e = random_below(&mut rng, ctx.modulus());

    c.bench_function("k256_pow", |bencher| {
        bencher.iter(|| black_box(ctx.pow(black_box(&a), black_box(&e))))
    });
}

fn bench_field_invert(c: &mut Criterion) {
    let ctx = ReductionContext::k256();
    let mut rng = StdRng::seed_from_u64(42);
    let a = ctx.convert_to(&random_below(&mut rng, ctx.modulus()));

    c.bench_function("k256_invert", |bencher| {
        bencher.iter(|| black_box(ctx.invert(black_box(&a))))
    });
}

criterion_group!(
    benches,
    bench_k256_reduce,
    bench_generic_reduce,
    bench_field_mul,
    bench_montgomery_mul,
    bench_field_pow,
    bench_field_invert
);
criterion_main!(benches);
