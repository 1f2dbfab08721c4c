//! Full-market universe from the NSE equity master list.
//!
//! Downloads `EQUITY_L.csv` from the NSE archives, keeps rows in the EQ
//! series, and suffixes each symbol for the chart API. Every failure path
//! yields an empty list: a degraded scan, not an aborted run.

use std::time::Duration;

use super::universe::{UniverseSource, EXCHANGE_SUFFIX};
use crate::domain::Symbol;

const EQUITY_LIST_URL: &str =
    "https://nsearchives.nseindia.com/content/equities/EQUITY_L.csv";

/// Rows must carry this series code to count as regular equity.
const EQUITY_SERIES: &str = "EQ";

/// Universe source backed by the NSE equity master CSV.
pub struct NseEquityList {
    client: reqwest::blocking::Client,
}

impl NseEquityList {
    pub fn new() -> Self {
        // The NSE archive rejects requests without a browser user agent.
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36")
            .build()
            .expect("failed to build HTTP client");
        Self { client }
    }

    fn download(&self) -> Result<String, reqwest::Error> {
        self.client
            .get(EQUITY_LIST_URL)
            .send()?
            .error_for_status()?
            .text()
    }
}

impl Default for NseEquityList {
    fn default() -> Self {
        Self::new()
    }
}

impl UniverseSource for NseEquityList {
    fn fetch(&self) -> Vec<Symbol> {
        let body = match self.download() {
            Ok(body) => body,
            Err(e) => {
                log::warn!("equity list download failed: {e}");
                return Vec::new();
            }
        };
        match parse_equity_list(&body) {
            Ok(symbols) => symbols,
            Err(e) => {
                log::warn!("equity list parse failed: {e}");
                Vec::new()
            }
        }
    }
}

/// Parse the equity master CSV into suffixed symbols, preserving file order.
///
/// The upstream header pads some column names with spaces, so both headers
/// and values are trimmed before matching.
fn parse_equity_list(body: &str) -> Result<Vec<Symbol>, csv::Error> {
    let mut reader = csv::Reader::from_reader(body.as_bytes());
    let headers = reader.headers()?.clone();

    let Some(symbol_idx) = headers.iter().position(|h| h.trim() == "SYMBOL") else {
        log::warn!("equity list has no SYMBOL column");
        return Ok(Vec::new());
    };
    let Some(series_idx) = headers.iter().position(|h| h.trim() == "SERIES") else {
        log::warn!("equity list has no SERIES column");
        return Ok(Vec::new());
    };

    let mut symbols = Vec::new();
    for record in reader.records() {
        let record = record?;
        let series = record.get(series_idx).map(str::trim).unwrap_or("");
        if series != EQUITY_SERIES {
            continue;
        }
        if let Some(symbol) = record.get(symbol_idx).map(str::trim) {
            if !symbol.is_empty() {
                symbols.push(format!("{symbol}{EXCHANGE_SUFFIX}"));
            }
        }
    }
    Ok(symbols)
}
