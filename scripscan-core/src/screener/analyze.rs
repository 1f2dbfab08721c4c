//! Per-symbol analysis: indicator readings folded into a composite score.
//!
//! Scoring is additive from a base of 50. An oversold RSI adds 15, an
//! overbought RSI subtracts 15, price above the moving average adds 15,
//! positive momentum adds 10. The reachable range is therefore [35, 90].

use thiserror::Error;

use crate::data::universe::display_symbol;
use crate::domain::{PriceSeries, ScoredStock, Trend};
use crate::indicators::{momentum, rsi, sma};

/// Minimum observations for a usable series.
pub const MIN_OBSERVATIONS: usize = 10;

/// Closes feeding the moving average (fewer when the series is shorter).
pub const SMA_WINDOW: usize = 20;

const BASE_SCORE: i32 = 50;
const OVERSOLD_RSI: f64 = 35.0;
const OVERBOUGHT_RSI: f64 = 70.0;
const OVERSOLD_BONUS: i32 = 15;
const OVERBOUGHT_PENALTY: i32 = 15;
const ABOVE_SMA_BONUS: i32 = 15;
const POSITIVE_MOMENTUM_BONUS: i32 = 10;

/// Why one symbol's analysis produced no result.
///
/// Absorbed by the scan loop: a dropped ticker, never a user-facing error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DataUnavailable {
    #[error("only {got} observations, need {MIN_OBSERVATIONS}")]
    InsufficientHistory { got: usize },

    #[error("series produced a non-finite indicator value")]
    CorruptSeries,
}

/// Score one symbol from its recent closes.
///
/// Pure: the same series always yields the same record. The record carries
/// the display form of the symbol, exchange suffix stripped.
pub fn analyze(symbol: &str, series: &PriceSeries) -> Result<ScoredStock, DataUnavailable> {
    let closes = series.closes();
    if closes.len() < MIN_OBSERVATIONS {
        return Err(DataUnavailable::InsufficientHistory { got: closes.len() });
    }

    let current = closes[closes.len() - 1];
    let sma20 = sma(&closes, SMA_WINDOW);
    let rsi = rsi(&closes);
    let momentum = momentum(&closes);

    // A zero or NaN close poisons at least one reading; reject the series
    // rather than scoring garbage.
    if !(current.is_finite() && sma20.is_finite() && rsi.is_finite() && momentum.is_finite()) {
        return Err(DataUnavailable::CorruptSeries);
    }

    let mut score = BASE_SCORE;
    if rsi < OVERSOLD_RSI {
        score += OVERSOLD_BONUS;
    } else if rsi > OVERBOUGHT_RSI {
        score -= OVERBOUGHT_PENALTY;
    }
    if current > sma20 {
        score += ABOVE_SMA_BONUS;
    }
    if momentum > 0.0 {
        score += POSITIVE_MOMENTUM_BONUS;
    }

    let trend = if current > sma20 {
        Trend::Bullish
    } else {
        Trend::Bearish
    };

    Ok(ScoredStock {
        symbol: display_symbol(symbol).to_string(),
        price: current,
        score,
        rsi,
        trend,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::make_series;

    #[test]
    fn short_series_is_insufficient() {
        let series = make_series(&[100.0; 9]);
        assert_eq!(
            analyze("TCS.NS", &series),
            Err(DataUnavailable::InsufficientHistory { got: 9 })
        );
    }

    #[test]
    fn ten_observations_is_enough() {
        let series = make_series(&[100.0; 10]);
        assert!(analyze("TCS.NS", &series).is_ok());
    }

    #[test]
    fn symbol_suffix_is_stripped_for_display() {
        let series = make_series(&[100.0; 12]);
        let scored = analyze("RELIANCE.NS", &series).unwrap();
        assert_eq!(scored.symbol, "RELIANCE");
    }

    #[test]
    fn steadily_rising_series_scores_90() {
        // All gains: rsi reads 0 (oversold bonus), price above the mean,
        // momentum positive. 50 + 15 + 15 + 10.
        let closes: Vec<f64> = (0..15).map(|i| 100.0 + i as f64).collect();
        let scored = analyze("INFY.NS", &make_series(&closes)).unwrap();
        assert_eq!(scored.score, 90);
        assert_eq!(scored.trend, Trend::Bullish);
        assert_eq!(scored.price, 114.0);
        assert_eq!(scored.rsi, 0.0);
    }

    #[test]
    fn steadily_falling_series_scores_65() {
        // All losses also read rsi 0, so the oversold bonus applies even
        // though price sits below the mean and momentum is negative.
        let closes: Vec<f64> = (0..15).map(|i| 200.0 - i as f64).collect();
        let scored = analyze("ITC.NS", &make_series(&closes)).unwrap();
        assert_eq!(scored.score, 65);
        assert_eq!(scored.trend, Trend::Bearish);
    }

    #[test]
    fn neutral_series_stays_at_base_score() {
        // Alternating closes ending on the low leg: rsi 50 (no adjustment),
        // price below the mean, momentum zero.
        let closes = [
            100.0, 101.0, 100.0, 101.0, 100.0, 101.0, 100.0, 101.0, 100.0, 101.0, 100.0,
        ];
        let scored = analyze("NTPC.NS", &make_series(&closes)).unwrap();
        assert_eq!(scored.score, 50);
        assert_eq!(scored.trend, Trend::Bearish);
    }

    #[test]
    fn price_at_the_mean_is_not_above_it() {
        // Flat series: current == sma, so no above-average bonus and the
        // trend reads bearish.
        let scored = analyze("ONGC.NS", &make_series(&[50.0; 12])).unwrap();
        assert_eq!(scored.trend, Trend::Bearish);
        // flat deltas read rsi 0, hence the oversold bonus and nothing else
        assert_eq!(scored.score, 65);
    }

    #[test]
    fn zero_first_close_is_corrupt() {
        let mut closes = vec![100.0; 12];
        closes[0] = 0.0;
        assert_eq!(
            analyze("BAD.NS", &make_series(&closes)),
            Err(DataUnavailable::CorruptSeries)
        );
    }

    #[test]
    fn nan_close_is_corrupt() {
        let mut closes = vec![100.0; 12];
        closes[5] = f64::NAN;
        assert_eq!(
            analyze("BAD.NS", &make_series(&closes)),
            Err(DataUnavailable::CorruptSeries)
        );
    }

    #[test]
    fn analysis_is_deterministic() {
        let closes: Vec<f64> = (0..20).map(|i| 100.0 + (i % 5) as f64).collect();
        let series = make_series(&closes);
        let first = analyze("SBIN.NS", &series).unwrap();
        let second = analyze("SBIN.NS", &series).unwrap();
        assert_eq!(first, second);
    }
}
