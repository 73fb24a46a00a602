// File: crates/algorithms/benches/p256.rs
// Benchmarks for NIST P-256 field, scalar and point operations

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use ecverify_algorithms::ec::p256::{
    self, FieldElement, Point, Scalar, P256_FIELD_ELEMENT_SIZE, P256_SCALAR_SIZE,
};
use rand::{rngs::OsRng, RngCore};

/// Generate a random field element for benchmarking
fn random_field_element() -> FieldElement {
    let mut bytes = [0u8; P256_FIELD_ELEMENT_SIZE];
    OsRng.fill_bytes(&mut bytes);
    FieldElement::from_bytes_reduced(&bytes)
}

/// Generate a random non-zero scalar for benchmarking
fn random_scalar() -> Scalar {
    let mut bytes = [0u8; P256_SCALAR_SIZE];
    loop {
        OsRng.fill_bytes(&mut bytes);
        if let Ok(scalar) = Scalar::new(bytes) {
            return scalar;
        }
    }
}

/// Generate a random point on the curve
fn random_point() -> Point {
    p256::scalar_mult_base_g(&random_scalar())
}

fn bench_field_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("p256-field");

    group.bench_function("addition", |b| {
        b.iter_batched(
            || (random_field_element(), random_field_element()),
            |(x, y)| black_box(x.add(&y)),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("multiplication", |b| {
        b.iter_batched(
            || (random_field_element(), random_field_element()),
            |(x, y)| black_box(x.mul(&y)),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("squaring", |b| {
        b.iter_batched(random_field_element, |x| black_box(x.square()), BatchSize::SmallInput)
    });

    group.bench_function("inversion", |b| {
        b.iter_batched(
            random_field_element,
            |x| black_box(x.invert()),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("sqrt", |b| {
        b.iter_batched(random_field_element, |x| black_box(x.sqrt()), BatchSize::SmallInput)
    });

    group.finish();
}

fn bench_scalar_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("p256-scalar");

    group.bench_function("mul_mod_n", |b| {
        b.iter_batched(
            || (random_scalar(), random_scalar()),
            |(x, y)| black_box(x.mul_mod_n(&y)),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("inv_mod_n", |b| {
        b.iter_batched(random_scalar, |x| black_box(x.inv_mod_n()), BatchSize::SmallInput)
    });

    group.finish();
}

fn bench_point_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("p256-point");

    group.bench_function("addition", |b| {
        b.iter_batched(
            || (random_point(), random_point()),
            |(p, q)| black_box(p.add(&q)),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("doubling", |b| {
        b.iter_batched(random_point, |p| black_box(p.double()), BatchSize::SmallInput)
    });

    group.bench_function("scalar_mult", |b| {
        b.iter_batched(
            || (random_point(), random_scalar()),
            |(p, k)| black_box(p256::scalar_mult(&k, &p)),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("scalar_mult_base", |b| {
        b.iter_batched(
            random_scalar,
            |k| black_box(p256::scalar_mult_base_g(&k)),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("deserialize_compressed", |b| {
        b.iter_batched(
            || random_point().serialize_compressed(),
            |bytes| black_box(Point::deserialize_compressed(&bytes)),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_field_operations,
    bench_scalar_operations,
    bench_point_operations
);
criterion_main!(benches);
