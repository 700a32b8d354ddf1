//! Benchmarks for the force calculation.
use std::hint::black_box;

use coulombic::compute;
use criterion::{Criterion, criterion_group, criterion_main};

fn force_closed_form(c: &mut Criterion) {
    c.bench_function("force_closed_form", |b| {
        b.iter(|| {
            let _f = black_box(compute(2e-9, -3e-9, 3.0, 4.0).unwrap());
        });
    });
}

criterion_group!(benches, force_closed_form);
criterion_main!(benches);
