use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use rand::Rng;
use statorder::prelude::*;
use std::hint::black_box;

fn bench_single_key(c: &mut Criterion) {
    let mut group = c.benchmark_group("Single Key");
    group.sample_size(10);

    // Dataset generation
    let mut rng = rand::rng();
    let count = 100_000;

    let doubles: Vec<f64> = (0..count)
        .map(|_| {
            if rng.random_bool(0.05) {
                NA_REAL
            } else {
                rng.random::<f64>()
            }
        })
        .collect();

    let strings: Vec<Option<String>> = (0..count)
        .map(|_| {
            let len = rng.random_range(5..20);
            Some((0..len).map(|_| rng.random_range('a'..='z')).collect())
        })
        .collect();

    group.bench_function("order (double, 5% NA)", |b| {
        b.iter(|| order_by(black_box(&doubles), OrderOptions::default()))
    });

    group.bench_function("order (character)", |b| {
        b.iter(|| order_by(black_box(&strings), OrderOptions::default()))
    });

    // Std stable sort of an index array
    group.bench_function("slice::sort_by (indices, double)", |b| {
        b.iter_batched(
            || (0..count).collect::<Vec<usize>>(),
            |mut idx| {
                idx.sort_by(|&x, &y| doubles[x].total_cmp(&doubles[y]));
                idx
            },
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

fn bench_multi_key(c: &mut Criterion) {
    let mut group = c.benchmark_group("Multi Key");
    group.sample_size(10);

    let mut rng = rand::rng();
    let count = 100_000;

    let columns = vec![
        Vector::Integer((0..count).map(|_| rng.random_range(0..100)).collect()),
        Vector::Double((0..count).map(|_| rng.random::<f64>()).collect()),
    ];

    group.bench_function("order (integer, double)", |b| {
        b.iter(|| order(black_box(&columns), OrderOptions::default()))
    });

    group.bench_function("order (integer, double, decreasing)", |b| {
        b.iter(|| order(black_box(&columns), OrderOptions::new(true, true)))
    });

    group.finish();
}

criterion_group!(benches, bench_single_key, bench_multi_key);
criterion_main!(benches);
