//! Benchmarks for position sizing

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use halfkelly::instruments::{get_instrument, EURUSD};
use halfkelly::sizing::size_position;
use rust_decimal_macros::dec;

fn benchmark_size_position(c: &mut Criterion) {
    c.bench_function("size_position", |b| {
        b.iter(|| {
            size_position(
                black_box(&EURUSD),
                black_box(dec!(10000)),
                black_box(dec!(2.0)),
                black_box(dec!(1.08500)),
                black_box(dec!(1.08000)),
                black_box(Some(dec!(1.09500))),
                "EUR/USD",
            )
        })
    });
}

fn benchmark_registry_lookup(c: &mut Criterion) {
    c.bench_function("get_instrument_alias", |b| {
        b.iter(|| get_instrument(black_box("gold")))
    });
}

criterion_group!(benches, benchmark_size_position, benchmark_registry_lookup);
criterion_main!(benches);
