//! Benchmarks for Euler-operator sequences.

use criterion::{criterion_group, criterion_main, Criterion};
use hedron::prelude::*;

/// Build an n-gon base face via mvfs + (n-1) mev + mef, ready to sweep.
fn ngon_base(model: &mut Model, n: u32) -> SolidId {
    let solid = model.make_vertex_face_solid(1, 1, 1.0, 0.0, 0.0);
    for i in 1..n {
        let angle = 2.0 * std::f64::consts::PI * f64::from(i) / f64::from(n);
        model
            .mev(solid, 1, i, i + 1, angle.cos(), angle.sin(), 0.0)
            .unwrap();
    }
    model.mef(solid, 1, n, 1, 2).unwrap();
    solid
}

fn bench_block(c: &mut Criterion) {
    c.bench_function("block", |b| {
        b.iter(|| {
            let mut model = Model::new();
            model.block(2.0, 3.0, 4.0).unwrap()
        });
    });
}

fn bench_sweep(c: &mut Criterion) {
    c.bench_function("sweep_64gon", |b| {
        b.iter(|| {
            let mut model = Model::new();
            let solid = ngon_base(&mut model, 64);
            let base = model.face_by_number(solid, 1).unwrap();
            model.sweep(base, 0.0, 0.0, 1.0).unwrap();
            solid
        });
    });
}

fn bench_validate(c: &mut Criterion) {
    let mut model = Model::new();
    let solid = ngon_base(&mut model, 64);
    let base = model.face_by_number(solid, 1).unwrap();
    model.sweep(base, 0.0, 0.0, 1.0).unwrap();

    c.bench_function("validate_64gon_prism", |b| {
        b.iter(|| validate_solid(&model, solid));
    });
}

criterion_group!(benches, bench_block, bench_sweep, bench_validate);
criterion_main!(benches);
