//! The scan-score pipeline: per-symbol analysis and the universe loop.

pub mod analyze;
pub mod scan;

pub use analyze::{analyze, DataUnavailable, MIN_OBSERVATIONS, SMA_WINDOW};
pub use scan::{scan, ScanError, ScanProgress, SilentProgress, StdoutProgress};
