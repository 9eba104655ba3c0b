//! Command-line arguments for the terminal runner.

use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

use crate::core::{ConfigError, SessionConfig};

#[derive(Parser, Debug, Clone)]
#[command(name = "blockfall", version, about = "Falling-block puzzle game for the terminal")]
pub struct Args {
    #[arg(short, long, value_name = "FILE", help = "JSON session configuration", value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Board height in rows (overrides the config file)")]
    pub rows: Option<usize>,

    #[arg(long, help = "Board width in columns (overrides the config file)")]
    pub cols: Option<usize>,

    #[arg(long, help = "Piece selection seed (defaults to the wall clock)")]
    pub seed: Option<u32>,

    #[arg(long, value_name = "FILE", default_value = "blockfall.log", help = "Log file path")]
    pub log_file: PathBuf,

    #[arg(long, value_name = "LEVEL", default_value = "info", help = "Log threshold: off, error, warn, info, debug or trace")]
    pub log_level: LevelFilter,
}

impl Args {
    /// Build the session configuration: the config file (or defaults), then
    /// flag overrides, then validation.
    ///
    /// `fallback_seed` is used when neither the file nor `--seed` sets one.
    pub fn session_config(&self, fallback_seed: u32) -> Result<SessionConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => SessionConfig::load(path)?,
            None => SessionConfig::default(),
        };

        if let Some(rows) = self.rows {
            config.rows = rows;
        }
        if let Some(cols) = self.cols {
            config.cols = cols;
        }
        config.seed = self.seed.or(config.seed).or(Some(fallback_seed));

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("blockfall").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let args = parse(&[]);
        assert!(args.config.is_none());
        assert_eq!(args.log_level, LevelFilter::Info);
        assert_eq!(args.log_file, PathBuf::from("blockfall.log"));

        let config = args.session_config(77).unwrap();
        assert_eq!((config.rows, config.cols), (20, 10));
        assert_eq!(config.seed, Some(77));
    }

    #[test]
    fn test_flags_override_dimensions_and_seed() {
        let args = parse(&["--rows", "12", "--cols", "6", "--seed", "3", "--log-level", "off"]);
        let config = args.session_config(77).unwrap();
        assert_eq!((config.rows, config.cols), (12, 6));
        assert_eq!(config.seed, Some(3));
        assert_eq!(args.log_level, LevelFilter::Off);
    }

    #[test]
    fn test_too_small_board_is_rejected() {
        let args = parse(&["--cols", "2"]);
        assert!(matches!(
            args.session_config(1),
            Err(ConfigError::DimensionTooSmall { name: "cols", .. })
        ));
    }

    #[test]
    fn test_missing_config_file_is_io_error() {
        let args = parse(&["--config", "/nonexistent/blockfall.json"]);
        assert!(matches!(args.session_config(1), Err(ConfigError::Io { .. })));
    }
}
