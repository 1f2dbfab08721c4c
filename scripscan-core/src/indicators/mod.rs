//! Indicator primitives for the screener.
//!
//! Three pure functions over a chronological slice of closes. Each returns a
//! single latest-window reading rather than a rolling vector: the screener
//! scores one symbol at a time from roughly one month of history, so only
//! the most recent value is ever consumed.
//!
//! All three return NaN when the slice is too short to compute; the analysis
//! layer rejects non-finite readings before scoring.

pub mod momentum;
pub mod rsi;
pub mod sma;

pub use momentum::momentum;
pub use rsi::rsi;
pub use sma::sma;

/// Create a synthetic price series from close prices for testing.
///
/// Dates are consecutive days from a fixed base; only the closes matter to
/// the indicators.
#[cfg(test)]
pub fn make_series(closes: &[f64]) -> crate::domain::PriceSeries {
    use crate::domain::{ClosePoint, PriceSeries};
    let base_date = chrono::NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
    PriceSeries::new(
        closes
            .iter()
            .enumerate()
            .map(|(i, &close)| ClosePoint {
                date: base_date + chrono::Duration::days(i as i64),
                close,
            })
            .collect(),
    )
}

/// Assert two f64 values are approximately equal (within epsilon).
#[cfg(test)]
pub fn assert_approx(actual: f64, expected: f64, epsilon: f64) {
    assert!(
        (actual - expected).abs() < epsilon,
        "assert_approx failed: actual={actual}, expected={expected}, diff={}, epsilon={epsilon}",
        (actual - expected).abs()
    );
}

/// Default epsilon for indicator tests.
#[cfg(test)]
pub const DEFAULT_EPSILON: f64 = 1e-10;
