//! Domain types for scripscan.

pub mod allocation;
pub mod scored;
pub mod series;

pub use allocation::{Allocation, AllocationLine, AllocationSummary};
pub use scored::{ScoredStock, Trend};
pub use series::{ClosePoint, PriceSeries};

/// Symbol type alias
pub type Symbol = String;
