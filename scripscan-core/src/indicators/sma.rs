//! Simple Moving Average (SMA).
//!
//! Mean of the trailing `window` closes. When the series is shorter than the
//! window, the mean covers every close available instead of going NaN; the
//! screener runs on about a month of data, so a 20-day window frequently has
//! only 18-19 observations under it.

/// Mean of the last `window` closes, or of the whole series when it is
/// shorter than the window. NaN on an empty slice.
pub fn sma(closes: &[f64], window: usize) -> f64 {
    assert!(window >= 1, "SMA window must be >= 1");
    if closes.is_empty() {
        return f64::NAN;
    }
    let tail = &closes[closes.len().saturating_sub(window)..];
    tail.iter().sum::<f64>() / tail.len() as f64
}
