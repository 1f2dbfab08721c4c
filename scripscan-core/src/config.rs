//! Run configuration — scan mode, budget, and target position count.
//!
//! Loadable from a TOML file with per-field defaults, so a partial file
//! works. Validation bounds mirror what the interactive flags accept.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::allocator::MAX_TARGET_STOCKS;
use crate::data::universe::ScanMode;

/// Smallest budget worth allocating.
pub const MIN_BUDGET: f64 = 1000.0;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("budget {budget:.2} is below the minimum of {MIN_BUDGET:.0}")]
    BudgetTooSmall { budget: f64 },

    #[error("target stock count {requested} is outside 1..={MAX_TARGET_STOCKS}")]
    StockCountOutOfRange { requested: usize },

    #[error("read config file: {0}")]
    Io(String),

    #[error("parse config TOML: {0}")]
    Parse(String),
}

/// Parameters for one screen-and-allocate run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenConfig {
    /// Universe to scan
    #[serde(default = "default_mode")]
    pub mode: ScanMode,

    /// Total budget to spread across the portfolio
    #[serde(default = "default_budget")]
    pub budget: f64,

    /// How many distinct names to aim for
    #[serde(default = "default_target_stocks")]
    pub target_stocks: usize,
}

fn default_mode() -> ScanMode {
    ScanMode::Curated
}

fn default_budget() -> f64 {
    50_000.0
}

fn default_target_stocks() -> usize {
    5
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            mode: default_mode(),
            budget: default_budget(),
            target_stocks: default_target_stocks(),
        }
    }
}

impl ScreenConfig {
    /// Load a configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_toml(&content)
    }

    /// Parse a configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Check the user-facing bounds: budget floor and position count range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.budget.is_finite() || self.budget < MIN_BUDGET {
            return Err(ConfigError::BudgetTooSmall {
                budget: self.budget,
            });
        }
        if self.target_stocks < 1 || self.target_stocks > MAX_TARGET_STOCKS {
            return Err(ConfigError::StockCountOutOfRange {
                requested: self.target_stocks,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_a_curated_scan() {
        let config = ScreenConfig::default();
        assert_eq!(config.mode, ScanMode::Curated);
        assert_eq!(config.budget, 50_000.0);
        assert_eq!(config.target_stocks, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn full_toml_parses() {
        let config = ScreenConfig::from_toml(
            "mode = \"full\"\nbudget = 75000.0\ntarget_stocks = 8\n",
        )
        .unwrap();
        assert_eq!(config.mode, ScanMode::Full);
        assert_eq!(config.budget, 75_000.0);
        assert_eq!(config.target_stocks, 8);
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let config = ScreenConfig::from_toml("budget = 20000.0\n").unwrap();
        assert_eq!(config.mode, ScanMode::Curated);
        assert_eq!(config.budget, 20_000.0);
        assert_eq!(config.target_stocks, 5);
    }

    #[test]
    fn unknown_mode_is_a_parse_error() {
        let err = ScreenConfig::from_toml("mode = \"everything\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn budget_floor_is_enforced() {
        let config = ScreenConfig {
            budget: 999.0,
            ..ScreenConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::BudgetTooSmall { .. })
        ));

        let at_floor = ScreenConfig {
            budget: MIN_BUDGET,
            ..ScreenConfig::default()
        };
        assert!(at_floor.validate().is_ok());
    }

    #[test]
    fn stock_count_range_is_enforced() {
        for bad in [0usize, 21] {
            let config = ScreenConfig {
                target_stocks: bad,
                ..ScreenConfig::default()
            };
            assert!(matches!(
                config.validate(),
                Err(ConfigError::StockCountOutOfRange { .. })
            ));
        }
        for ok in [1usize, 20] {
            let config = ScreenConfig {
                target_stocks: ok,
                ..ScreenConfig::default()
            };
            assert!(config.validate().is_ok());
        }
    }

    #[test]
    fn non_finite_budget_fails_validation() {
        let config = ScreenConfig {
            budget: f64::NAN,
            ..ScreenConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn from_file_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("screen.toml");
        let config = ScreenConfig {
            mode: ScanMode::Full,
            budget: 12_345.0,
            target_stocks: 3,
        };
        std::fs::write(&path, toml::to_string(&config).unwrap()).unwrap();
        let loaded = ScreenConfig::from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = ScreenConfig::from_file(Path::new("/nonexistent/screen.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
