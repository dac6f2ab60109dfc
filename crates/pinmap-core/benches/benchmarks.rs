use criterion::{criterion_group, criterion_main, Criterion};
use pinmap_core::{Atlas, StandardBackend};
use std::hint::black_box;

fn bench_filter(c: &mut Criterion) {
    let atlas = Atlas::<StandardBackend>::load().expect("bundled fixture");

    c.bench_function("filter_cities substring", |b| {
        b.iter(|| atlas.filter_cities(black_box("ar")))
    });

    c.bench_function("suggest projection", |b| {
        b.iter(|| atlas.suggest(black_box("a")))
    });

    c.bench_function("visible_markers empty query", |b| {
        b.iter(|| atlas.visible_markers(black_box("")))
    });
}

criterion_group!(benches, bench_filter);
criterion_main!(benches);
