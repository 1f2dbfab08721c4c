//! ScoredStock — the per-symbol outcome of one analysis pass.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Price position relative to the trailing moving average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    Bullish,
    Bearish,
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trend::Bullish => write!(f, "Bullish"),
            Trend::Bearish => write!(f, "Bearish"),
        }
    }
}

/// One symbol's analysis outcome: latest price, composite score, and the
/// indicator readings behind the score.
///
/// `symbol` is the display form with the exchange suffix stripped. A record
/// is built once per successful analysis and never mutated; a failed
/// analysis yields an error, not a partial record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredStock {
    pub symbol: String,
    pub price: f64,
    pub score: i32,
    pub rsi: f64,
    pub trend: Trend,
}
