// Copyright (c) 2026, Chad Hogan
// All rights reserved.
//
// This source code is licensed under the BSD-3-Clause license found in the
// LICENSE file in the root directory of this source tree.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use icevel::core::Field2;
use icevel::speed::compute_speed;

fn make_components(n: usize) -> (Field2, Field2) {
    let num = n * n;
    let vx: Vec<f64> = (0..num).map(|i| (i % 251) as f64 - 125.0).collect();
    let vy: Vec<f64> = (0..num).map(|i| (i % 127) as f64 - 60.0).collect();
    (
        Field2::new("VX", [n, n], vx).unwrap(),
        Field2::new("VY", [n, n], vy).unwrap(),
    )
}

fn bench_speed_1024(c: &mut Criterion) {
    let (vx, vy) = make_components(1024);
    c.bench_function("speed_1024x1024", |b| {
        b.iter(|| compute_speed(black_box(&vx), black_box(&vy)).unwrap())
    });
}

fn bench_speed_4096(c: &mut Criterion) {
    let (vx, vy) = make_components(4096);
    c.bench_function("speed_4096x4096", |b| {
        b.iter(|| compute_speed(black_box(&vx), black_box(&vy)).unwrap())
    });
}

criterion_group!(benches, bench_speed_1024, bench_speed_4096);
criterion_main!(benches);
