//! Tip rotation benchmark, including the reshuffle at each cycle boundary.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pii_exposure::tips::TipRotator;

fn bench_rotation(c: &mut Criterion) {
    let mut rotator = TipRotator::shuffled(30);

    c.bench_function("tip_rotator_next", |b| b.iter(|| black_box(rotator.next())));
}

fn bench_full_cycle(c: &mut Criterion) {
    let mut rotator = TipRotator::shuffled(30);

    c.bench_function("tip_rotator_cycle_30", |b| {
        b.iter(|| {
            for _ in 0..30 {
                black_box(rotator.next());
            }
        })
    });
}

criterion_group!(benches, bench_rotation, bench_full_cycle);
criterion_main!(benches);
