//! Price history provider trait and structured error types.
//!
//! The PriceProvider trait abstracts over the source of daily closes (the
//! Yahoo chart API in production, in-memory fixtures in tests) so the scan
//! loop can be driven without a network.

use thiserror::Error;

use crate::domain::PriceSeries;

/// Structured error types for price history fetches.
///
/// The scan loop absorbs every variant the same way (drop the symbol and
/// continue), but the variants stay distinct so logs say what actually
/// happened.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("network unreachable: {0}")]
    NetworkUnreachable(String),

    #[error("rate limited by provider (retry after {retry_after_secs}s)")]
    RateLimited { retry_after_secs: u64 },

    #[error("response format changed: {0}")]
    ResponseFormatChanged(String),

    #[error("symbol not found: {symbol}")]
    SymbolNotFound { symbol: String },

    #[error("provider error: {0}")]
    Other(String),
}

/// Trait for sources of recent daily closes.
///
/// Implementations handle the specifics of one backend. No minimum series
/// length is guaranteed; the analysis layer enforces its own history
/// requirement.
pub trait PriceProvider: Send + Sync {
    /// Human-readable name of this provider.
    fn name(&self) -> &str;

    /// Fetch roughly one month of daily closes for a symbol,
    /// chronologically ascending.
    fn history(&self, symbol: &str) -> Result<PriceSeries, ProviderError>;
}
