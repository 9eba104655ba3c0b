//! Session configuration
//!
//! Loaded from JSON; every field is optional and falls back to the classic
//! 20x10 game. Call [`SessionConfig::validate`] before building a session
//! from untrusted input.
//!
//! ```
//! use blockfall_core::SessionConfig;
//!
//! let config = SessionConfig::from_json_str(r#"{ "rows": 24, "scoring": { "points_per_line": 20 } }"#).unwrap();
//! assert_eq!(config.rows, 24);
//! assert_eq!(config.cols, 10);
//! assert_eq!(config.scoring.points_per_line, 20);
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::scoring::ScoringRules;
use crate::types::{DEFAULT_COLS, DEFAULT_ROWS, MIN_BOARD_DIM};

/// Seed used when the configuration does not provide one
pub const DEFAULT_SEED: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionConfig {
    pub rows: usize,
    pub cols: usize,
    /// Piece selection seed; `None` means [`DEFAULT_SEED`]
    pub seed: Option<u32>,
    pub scoring: ScoringRules,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            seed: None,
            scoring: ScoringRules::default(),
        }
    }
}

impl SessionConfig {
    /// Parse and validate a JSON document
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Serialize to pretty JSON
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn seed_or_default(&self) -> u32 {
        self.seed.unwrap_or(DEFAULT_SEED)
    }

    /// Check the preconditions the engine relies on
    pub fn validate(&self) -> Result<()> {
        if self.rows < MIN_BOARD_DIM {
            return Err(ConfigError::DimensionTooSmall {
                name: "rows",
                value: self.rows,
                min: MIN_BOARD_DIM,
            });
        }
        if self.cols < MIN_BOARD_DIM {
            return Err(ConfigError::DimensionTooSmall {
                name: "cols",
                value: self.cols,
                min: MIN_BOARD_DIM,
            });
        }

        let rules = &self.scoring;
        if !(rules.base_drop_ms.is_finite() && rules.base_drop_ms > 0.0) {
            return Err(ConfigError::InvalidDropInterval(rules.base_drop_ms));
        }
        if !(rules.speedup_factor > 0.0 && rules.speedup_factor <= 1.0) {
            return Err(ConfigError::InvalidSpeedup(rules.speedup_factor));
        }
        if rules.lines_per_level == 0 {
            return Err(ConfigError::ZeroLinesPerLevel);
        }
        Ok(())
    }
}
