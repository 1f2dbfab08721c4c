//! ScripScan Core — universes, price history, indicators, scoring, allocation.
//!
//! The scan-and-allocate engine behind the CLI:
//! - Domain types (price series, scored stocks, allocations)
//! - Ticker universes: the curated Nifty 50 list and the capped full-market list
//! - Price history via the Yahoo chart API behind a provider trait
//! - Three indicator primitives (trailing SMA, simplified RSI, momentum)
//! - Composite scoring and the sequential scan loop
//! - Greedy whole-share budget allocation with an even per-stock cap

pub mod allocator;
pub mod config;
pub mod data;
pub mod domain;
pub mod indicators;
pub mod screener;
