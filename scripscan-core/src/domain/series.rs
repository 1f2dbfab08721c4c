//! PriceSeries — the fundamental market data unit.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One daily observation for a symbol: trading date and closing price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClosePoint {
    pub date: NaiveDate,
    pub close: f64,
}

/// Daily closes for a single symbol, chronologically ascending, latest last.
///
/// Providers deliver points already ordered and the series never re-sorts.
/// Calendar gaps (weekends, holidays, halts) are expected; consumers work on
/// whatever observations exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    pub points: Vec<ClosePoint>,
}

impl PriceSeries {
    pub fn new(points: Vec<ClosePoint>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Closing prices in chronological order.
    pub fn closes(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.close).collect()
    }

    /// The most recent observation, if any.
    pub fn latest(&self) -> Option<&ClosePoint> {
        self.points.last()
    }
}
