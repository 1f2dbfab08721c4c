//! Universes and price history providers

pub mod nse;
pub mod provider;
pub mod universe;
pub mod yahoo;

pub use nse::NseEquityList;
pub use provider::{PriceProvider, ProviderError};
pub use universe::{
    display_symbol, resolve_universe, ScanMode, StaticUniverse, Universe, UniverseSource,
    EXCHANGE_SUFFIX, FULL_SCAN_CAP, NIFTY_50,
};
pub use yahoo::YahooProvider;
