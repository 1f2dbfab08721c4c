//! Scan loop — fetch, analyze, collect, rank.
//!
//! Symbols are processed sequentially in universe order. Per-symbol
//! failures are absorbed so one delisted ticker cannot sink a 200-symbol
//! scan; only a completely empty result set is an error.

use thiserror::Error;

use super::analyze::analyze;
use crate::data::provider::PriceProvider;
use crate::domain::{ScoredStock, Symbol};

/// Progress callbacks for a multi-symbol scan.
pub trait ScanProgress: Send {
    /// Called after every symbol, success or failure, so
    /// `completed / total` climbs monotonically and reaches 1.0 exactly
    /// when the last symbol finishes.
    fn on_analyzed(&self, symbol: &str, completed: usize, total: usize);

    /// Called once after the loop with the kept/dropped split.
    fn on_scan_complete(&self, kept: usize, dropped: usize, total: usize);
}

/// Progress reporter that prints to stdout.
pub struct StdoutProgress;

impl ScanProgress for StdoutProgress {
    fn on_analyzed(&self, symbol: &str, completed: usize, total: usize) {
        println!("[{completed}/{total}] {symbol}");
    }

    fn on_scan_complete(&self, kept: usize, dropped: usize, total: usize) {
        println!("\nScan complete: {kept}/{total} scored, {dropped} dropped");
    }
}

/// No-op progress for library callers and tests.
pub struct SilentProgress;

impl ScanProgress for SilentProgress {
    fn on_analyzed(&self, _symbol: &str, _completed: usize, _total: usize) {}

    fn on_scan_complete(&self, _kept: usize, _dropped: usize, _total: usize) {}
}

/// Terminal scan outcomes.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScanError {
    /// The universe was empty, or every symbol failed fetch or analysis.
    #[error("no data found for any symbol in the universe")]
    NoData,
}

/// Scan `symbols` in order and return scored results ranked best-first.
///
/// A symbol that fails to fetch or analyze is dropped with a debug log line
/// and the scan continues. Ties in score keep their universe order.
pub fn scan(
    symbols: &[Symbol],
    provider: &dyn PriceProvider,
    progress: &dyn ScanProgress,
) -> Result<Vec<ScoredStock>, ScanError> {
    let total = symbols.len();
    let mut results: Vec<ScoredStock> = Vec::new();

    for (i, symbol) in symbols.iter().enumerate() {
        match provider.history(symbol) {
            Ok(series) => match analyze(symbol, &series) {
                Ok(scored) => results.push(scored),
                Err(reason) => log::debug!("dropping {symbol}: {reason}"),
            },
            Err(reason) => log::debug!("dropping {symbol}: {reason}"),
        }
        progress.on_analyzed(symbol, i + 1, total);
    }

    let kept = results.len();
    progress.on_scan_complete(kept, total - kept, total);

    if results.is_empty() {
        return Err(ScanError::NoData);
    }

    // sort_by is stable: equal scores keep their fetch order.
    results.sort_by(|a, b| b.score.cmp(&a.score));
    Ok(results)
}
