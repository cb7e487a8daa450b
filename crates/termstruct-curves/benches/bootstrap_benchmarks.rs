//! Benchmarks for curve construction.
//!
//! Run with: cargo bench -p termstruct-curves

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use termstruct_curves::prelude::*;

// =============================================================================
// TEST DATA GENERATORS
// =============================================================================

fn create_market(swap_years: usize) -> Vec<MarketInstrument> {
    let mut instruments = vec![
        MarketInstrument::libor(0.25, 0.15).unwrap(),
        MarketInstrument::libor(0.5, 0.20).unwrap(),
        MarketInstrument::future(0.75, 0.25).unwrap(),
    ];
    instruments.extend((1..=swap_years).map(|y| {
        let t = y as f64;
        MarketInstrument::swap(t, 0.3 + 0.08 * t).unwrap()
    }));
    instruments
}

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_bootstrap(c: &mut Criterion) {
    let mut group = c.benchmark_group("bootstrap");
    let config = CurveConfig::default();

    for years in [5, 10, 30] {
        let instruments = create_market(years);
        group.throughput(Throughput::Elements(instruments.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(years), &instruments, |b, inst| {
            b.iter(|| bootstrap_curve(black_box(inst), &config));
        });
    }

    group.finish();
}

fn bench_fit_validated(c: &mut Criterion) {
    let mut builder = CurveBuilder::new();
    builder.add_instruments(create_market(30));

    c.bench_function("fit_validated_30y", |b| {
        b.iter(|| black_box(builder.fit_validated()));
    });
}

fn bench_lorimier_query(c: &mut Criterion) {
    let mut method = LorimierMethod::new(
        vec![-0.0079, -0.0073, -0.0065, -0.0055, -0.0033, -0.0004],
        vec![2.0, 3.0, 4.0, 5.0, 7.0, 10.0],
    );
    method.fit().unwrap();

    c.bench_function("lorimier_get_yield_at", |b| {
        b.iter(|| method.get_yield_at(black_box(6.0)));
    });
}

criterion_group!(benches, bench_bootstrap, bench_fit_validated, bench_lorimier_query);
criterion_main!(benches);
