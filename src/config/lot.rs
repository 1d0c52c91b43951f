//! Lot and application configuration structures.

use serde::{Deserialize, Serialize};

use crate::core::DEFAULT_CAPACITY;

/// Lot configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LotConfig {
    /// Number of slots in a lot constructed without an explicit capacity.
    pub default_capacity: usize,
    /// Render `(empty)` placeholder rows for unoccupied slots in status
    /// output. Off by default: status then lists occupied slots only.
    pub status_include_empty: bool,
}

impl Default for LotConfig {
    fn default() -> Self {
        Self {
            default_capacity: DEFAULT_CAPACITY,
            status_include_empty: false,
        }
    }
}

impl LotConfig {
    /// Validate lot configuration values.
    pub fn validate(&self) -> Result<(), String> {
        if self.default_capacity == 0 {
            return Err("default_capacity must be greater than 0".into());
        }
        Ok(())
    }
}

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Lot settings.
    pub lot: LotConfig,
}

impl AppConfig {
    /// Validate every section.
    pub fn validate(&self) -> Result<(), String> {
        self.lot
            .validate()
            .map_err(|e| format!("lot config invalid: {e}"))
    }

    /// Parse application configuration from a JSON string and validate.
    pub fn from_json_str(input: &str) -> Result<Self, String> {
        let cfg: Self = serde_json::from_str(input).map_err(|e| format!("parse error: {e}"))?;
        cfg.validate()?;
        Ok(cfg)
    }
}
