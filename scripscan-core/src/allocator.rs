//! Greedy budget allocation across the top-ranked affordable names.
//!
//! The budget splits into an even per-stock cap. A name is eligible when its
//! price fits under the cap; the top eligible names by score each get
//! `floor(cap / price)` whole shares. Leftover cap is never redistributed to
//! cheaper names; it rolls up into the savings figure instead.

use thiserror::Error;

use crate::domain::{Allocation, AllocationLine, AllocationSummary, ScoredStock};

/// Upper bound on the target position count; also guards the cap division.
pub const MAX_TARGET_STOCKS: usize = 20;

/// Terminal allocation outcomes.
#[derive(Debug, Error, PartialEq)]
pub enum AllocationError {
    /// Nothing in the scan fits under the per-stock cap. Carries the cap so
    /// the message can say what to change.
    #[error("no stocks priced within the per-stock cap of {cap:.2}")]
    NoAffordableStocks { cap: f64 },
}

/// Allocate `budget` across up to `target_stocks` of the ranked names.
///
/// `ranked` must already be sorted best-first (the scan's output order).
/// `target_stocks` is clamped to `1..=MAX_TARGET_STOCKS`; user-facing range
/// errors belong to the config layer, not here.
pub fn allocate(
    ranked: &[ScoredStock],
    budget: f64,
    target_stocks: usize,
) -> Result<Allocation, AllocationError> {
    let target = target_stocks.clamp(1, MAX_TARGET_STOCKS);
    let cap = budget / target as f64;

    let affordable: Vec<&ScoredStock> = ranked.iter().filter(|s| s.price <= cap).collect();
    if affordable.is_empty() {
        return Err(AllocationError::NoAffordableStocks { cap });
    }

    let mut lines = Vec::new();
    for stock in affordable.into_iter().take(target) {
        let quantity = lot_quantity(cap, stock.price);
        if quantity == 0 {
            // Degenerate cap/price pairing (zero or non-finite price).
            continue;
        }
        lines.push(AllocationLine {
            symbol: stock.symbol.clone(),
            price: stock.price,
            quantity,
            cost: quantity as f64 * stock.price,
            score: stock.score,
            rsi: stock.rsi,
            trend: stock.trend,
        });
    }

    let total_invested: f64 = lines.iter().map(|l| l.cost).sum();
    let summary = AllocationSummary {
        total_invested,
        savings: budget - total_invested,
        positions: lines.len(),
    };

    Ok(Allocation { lines, summary })
}

/// Whole shares purchasable at `price` under `cap`; 0 when the ratio is not
/// a positive finite number.
fn lot_quantity(cap: f64, price: f64) -> u64 {
    let lots = cap / price;
    if lots.is_finite() && lots > 0.0 {
        lots.floor() as u64
    } else {
        0
    }
}
