//! Ticker universes — the curated Nifty 50 list and the capped full-market
//! list.
//!
//! Symbols carry the exchange suffix (`.NS`) end to end; it is stripped only
//! for display. The curated list is a compile-time constant, so curated
//! scans never touch the network to learn what to scan.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::Symbol;

/// Exchange suffix carried by every NSE symbol this tool handles.
pub const EXCHANGE_SUFFIX: &str = ".NS";

/// Upper bound on how many full-market symbols one scan will touch.
/// Keeps worst-case scan time bounded; symbols past the cap are ignored.
pub const FULL_SCAN_CAP: usize = 200;

/// The Nifty 50 constituents, already suffixed for the chart API.
pub const NIFTY_50: [&str; 50] = [
    "ADANIENT.NS",
    "ADANIPORTS.NS",
    "APOLLOHOSP.NS",
    "ASIANPAINT.NS",
    "AXISBANK.NS",
    "BAJAJ-AUTO.NS",
    "BAJFINANCE.NS",
    "BAJAJFINSV.NS",
    "BHARTIARTL.NS",
    "BPCL.NS",
    "BRITANNIA.NS",
    "CIPLA.NS",
    "COALINDIA.NS",
    "DIVISLAB.NS",
    "DRREDDY.NS",
    "EICHERMOT.NS",
    "GRASIM.NS",
    "HCLTECH.NS",
    "HDFCBANK.NS",
    "HDFCLIFE.NS",
    "HEROMOTOCO.NS",
    "HINDALCO.NS",
    "HINDUNILVR.NS",
    "ICICIBANK.NS",
    "INDUSINDBK.NS",
    "INFY.NS",
    "ITC.NS",
    "JSWSTEEL.NS",
    "KOTAKBANK.NS",
    "LT.NS",
    "LTIM.NS",
    "M&M.NS",
    "MARUTI.NS",
    "NESTLEIND.NS",
    "NTPC.NS",
    "ONGC.NS",
    "POWERGRID.NS",
    "RELIANCE.NS",
    "SBILIFE.NS",
    "SBIN.NS",
    "SUNPHARMA.NS",
    "TATACONSUM.NS",
    "TATAMOTORS.NS",
    "TATASTEEL.NS",
    "TCS.NS",
    "TECHM.NS",
    "TITAN.NS",
    "ULTRACEMCO.NS",
    "UPL.NS",
    "WIPRO.NS",
];

/// Which universe a scan covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanMode {
    /// The fixed Nifty 50 list. Fast.
    Curated,
    /// The full exchange list, capped at [`FULL_SCAN_CAP`]. Slow.
    Full,
}

impl fmt::Display for ScanMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanMode::Curated => write!(f, "curated"),
            ScanMode::Full => write!(f, "full"),
        }
    }
}

/// Supplier of the full-market symbol list.
///
/// Returns an empty vec on any fetch or parse failure: "no universe
/// available" is a state the caller renders, not an error that aborts the
/// run.
pub trait UniverseSource {
    fn fetch(&self) -> Vec<Symbol>;
}

/// Fixed in-memory universe, for tests and offline use.
pub struct StaticUniverse(pub Vec<Symbol>);

impl UniverseSource for StaticUniverse {
    fn fetch(&self) -> Vec<Symbol> {
        self.0.clone()
    }
}

/// The symbols one scan will cover, plus the truncation notice when the
/// full-market list was longer than the cap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Universe {
    pub symbols: Vec<Symbol>,
    /// Original list length when the source offered more symbols than
    /// [`FULL_SCAN_CAP`]. A notice for the user, not an error.
    pub truncated_from: Option<usize>,
}

impl Universe {
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

/// Resolve the scan universe for `mode`.
///
/// Curated mode never consults `source`. Full mode keeps at most
/// [`FULL_SCAN_CAP`] symbols in the source's original order.
pub fn resolve_universe(mode: ScanMode, source: &dyn UniverseSource) -> Universe {
    match mode {
        ScanMode::Curated => Universe {
            symbols: NIFTY_50.iter().map(|s| s.to_string()).collect(),
            truncated_from: None,
        },
        ScanMode::Full => {
            let mut symbols = source.fetch();
            if symbols.len() > FULL_SCAN_CAP {
                let original = symbols.len();
                symbols.truncate(FULL_SCAN_CAP);
                Universe {
                    symbols,
                    truncated_from: Some(original),
                }
            } else {
                Universe {
                    symbols,
                    truncated_from: None,
                }
            }
        }
    }
}

/// Strip the exchange suffix for display. Lookups always use the decorated
/// form; only the trailing suffix is removed, never an interior match.
pub fn display_symbol(symbol: &str) -> &str {
    symbol.strip_suffix(EXCHANGE_SUFFIX).unwrap_or(symbol)
}
