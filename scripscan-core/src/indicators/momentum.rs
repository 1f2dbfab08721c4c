//! Momentum — fractional change from the first close to the last.

/// `(last - first) / first` over the whole series. NaN on an empty slice.
///
/// A zero or non-finite first close produces a non-finite result, which the
/// analysis layer rejects rather than scoring.
pub fn momentum(closes: &[f64]) -> f64 {
    match (closes.first(), closes.last()) {
        (Some(&first), Some(&last)) => (last - first) / first,
        _ => f64::NAN,
    }
}
