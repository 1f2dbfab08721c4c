//! Allocation — suggested whole-share lots plus run totals.

use serde::{Deserialize, Serialize};

use super::scored::Trend;

/// One suggested purchase: `quantity` whole shares of `symbol` at `price`.
///
/// Carries the score, RSI, and trend of the underlying analysis so the line
/// can be rendered without a lookup back into the scan results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationLine {
    pub symbol: String,
    pub price: f64,
    pub quantity: u64,
    pub cost: f64,
    pub score: i32,
    pub rsi: f64,
    pub trend: Trend,
}

/// Totals across all allocation lines.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AllocationSummary {
    pub total_invested: f64,
    /// Budget left unspent after whole-share rounding and exclusions.
    pub savings: f64,
    /// Lines that received at least one share.
    pub positions: usize,
}

/// The allocator's combined output: lines in rank order plus totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Allocation {
    pub lines: Vec<AllocationLine>,
    pub summary: AllocationSummary,
}
