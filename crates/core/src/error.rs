//! Error types for session configuration
//!
//! Game operations themselves are total and never fail; only building a
//! session from external configuration can.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{name} must be at least {min}, got {value}")]
    DimensionTooSmall {
        name: &'static str,
        value: usize,
        min: usize,
    },
    #[error("base drop interval must be a positive number of milliseconds, got {0}")]
    InvalidDropInterval(f64),
    #[error("speed-up factor must be in (0, 1], got {0}")]
    InvalidSpeedup(f64),
    #[error("lines per level must be at least 1")]
    ZeroLinesPerLevel,
}

pub type Result<T> = std::result::Result<T, ConfigError>;
