//! Criterion benchmarks for scripscan hot paths.
//!
//! Benchmarks:
//! 1. Indicator primitives over a one-month close window
//! 2. Per-symbol analysis (indicators + scoring)
//! 3. The scan loop over an in-memory provider
//! 4. Budget allocation across a full scan's worth of candidates

use std::collections::HashMap;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use scripscan_core::allocator::allocate;
use scripscan_core::data::{PriceProvider, ProviderError};
use scripscan_core::domain::{ClosePoint, PriceSeries, ScoredStock, Symbol, Trend};
use scripscan_core::indicators::{momentum, rsi, sma};
use scripscan_core::screener::{analyze, scan, SilentProgress};

// ── Helpers ──────────────────────────────────────────────────────────

fn make_closes(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| 100.0 + (i as f64 * 0.4).sin() * 10.0)
        .collect()
}

fn make_series(n: usize) -> PriceSeries {
    let base_date = chrono::NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
    PriceSeries::new(
        make_closes(n)
            .into_iter()
            .enumerate()
            .map(|(i, close)| ClosePoint {
                date: base_date + chrono::Duration::days(i as i64),
                close,
            })
            .collect(),
    )
}

/// In-memory provider so the scan benchmark measures the loop, not a socket.
struct MapProvider(HashMap<String, PriceSeries>);

impl MapProvider {
    fn with_symbols(count: usize) -> (Self, Vec<Symbol>) {
        let symbols: Vec<Symbol> = (0..count).map(|i| format!("SYM{i}.NS")).collect();
        let map = symbols
            .iter()
            .map(|s| (s.clone(), make_series(22)))
            .collect();
        (Self(map), symbols)
    }
}

impl PriceProvider for MapProvider {
    fn name(&self) -> &str {
        "map"
    }

    fn history(&self, symbol: &str) -> Result<PriceSeries, ProviderError> {
        self.0
            .get(symbol)
            .cloned()
            .ok_or_else(|| ProviderError::SymbolNotFound {
                symbol: symbol.to_string(),
            })
    }
}

// ── 1. Indicator Primitives ──────────────────────────────────────────

fn bench_indicators(c: &mut Criterion) {
    let mut group = c.benchmark_group("indicator_primitives");
    let closes = make_closes(22);

    group.bench_function("sma_20", |b| {
        b.iter(|| sma(black_box(&closes), black_box(20)));
    });
    group.bench_function("rsi", |b| {
        b.iter(|| rsi(black_box(&closes)));
    });
    group.bench_function("momentum", |b| {
        b.iter(|| momentum(black_box(&closes)));
    });

    group.finish();
}

// ── 2. Per-Symbol Analysis ───────────────────────────────────────────

fn bench_analyze(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze");

    for &len in &[10, 22, 30] {
        let series = make_series(len);
        group.bench_with_input(BenchmarkId::new("closes", len), &len, |b, _| {
            b.iter(|| analyze(black_box("RELIANCE.NS"), black_box(&series)));
        });
    }

    group.finish();
}

// ── 3. Scan Loop ─────────────────────────────────────────────────────

fn bench_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan");

    for &count in &[50, 200] {
        let (provider, symbols) = MapProvider::with_symbols(count);
        group.bench_with_input(BenchmarkId::new("symbols", count), &count, |b, _| {
            b.iter(|| scan(black_box(&symbols), &provider, &SilentProgress));
        });
    }

    group.finish();
}

// ── 4. Budget Allocation ─────────────────────────────────────────────

fn bench_allocate(c: &mut Criterion) {
    let mut group = c.benchmark_group("allocate");

    let mut ranked: Vec<ScoredStock> = (0..200)
        .map(|i| ScoredStock {
            symbol: format!("SYM{i}"),
            price: 50.0 + (i as f64 * 3.7) % 4000.0,
            score: 90 - (i as i32 % 56),
            rsi: (i as f64 * 1.3) % 100.0,
            trend: if i % 2 == 0 {
                Trend::Bullish
            } else {
                Trend::Bearish
            },
        })
        .collect();
    ranked.sort_by(|a, b| b.score.cmp(&a.score));

    group.bench_function("200_candidates_5_slots", |b| {
        b.iter(|| allocate(black_box(&ranked), black_box(50_000.0), black_box(5)));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_indicators,
    bench_analyze,
    bench_scan,
    bench_allocate,
);
criterion_main!(benches);
