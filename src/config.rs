//! Application configuration loading and validation.
//!
//! Configuration is loaded from an optional TOML file; every field has a
//! default so the tool runs with no file at all. CLI flags override the
//! loaded values before validation.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing_subscriber::{fmt, EnvFilter};

use crate::error::{ConfigError, Result};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub scan: ScanConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Scan parameters: where the per-exchange price folders live and how
/// large the per-file sample window is.
#[derive(Debug, Clone, Deserialize)]
pub struct ScanConfig {
    /// Root directory holding one subdirectory per exchange.
    #[serde(default = "default_input_dir")]
    pub input_dir: PathBuf,

    /// Parent directory the timestamped results root is created under.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Number of consecutive observations sampled from each file.
    #[serde(default = "default_window")]
    pub window: usize,
}

fn default_input_dir() -> PathBuf {
    PathBuf::from("stock_price_data_files")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_window() -> usize {
    30
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            input_dir: default_input_dir(),
            output_dir: default_output_dir(),
            window: default_window(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scan: ScanConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Default config location, relative to the working directory.
    pub const DEFAULT_PATH: &'static str = "sigmascan.toml";

    /// Load and validate a config file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
                path: path.to_path_buf(),
                source,
            })?;

        let config: Config = toml::from_str(&content).map_err(ConfigError::Parse)?;
        config.validate()?;

        Ok(config)
    }

    /// Load `path` when it exists, fall back to defaults when it does not.
    ///
    /// Intended for the default config location, so the tool runs without
    /// a config file. Callers passing an explicitly chosen path should use
    /// [`Config::load`], which reports the missing file.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.scan.window == 0 {
            return Err(ConfigError::InvalidValue {
                field: "scan.window",
                reason: "window size must be at least 1".to_string(),
            }
            .into());
        }
        match self.logging.format.as_str() {
            "pretty" | "json" => {}
            other => {
                return Err(ConfigError::InvalidValue {
                    field: "logging.format",
                    reason: format!("unknown format {other:?}, expected \"pretty\" or \"json\""),
                }
                .into());
            }
        }
        Ok(())
    }

    pub fn init_logging(&self) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&self.logging.level));

        match self.logging.format.as_str() {
            "json" => {
                fmt().json().with_env_filter(filter).init();
            }
            _ => {
                fmt().with_env_filter(filter).init();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_the_defaults() {
        let config: Config = toml::from_str("").unwrap();

        assert_eq!(config.scan.input_dir, PathBuf::from("stock_price_data_files"));
        assert_eq!(config.scan.output_dir, PathBuf::from("."));
        assert_eq!(config.scan.window, 30);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn zero_window_fails_validation() {
        let config: Config = toml::from_str("[scan]\nwindow = 0\n").unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("scan.window"));
    }

    #[test]
    fn unknown_log_format_fails_validation() {
        let config: Config = toml::from_str("[logging]\nformat = \"xml\"\n").unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("logging.format"));
    }

    #[test]
    fn missing_default_path_falls_back_to_defaults() {
        let config = Config::load_or_default("definitely-not-here.toml").unwrap();
        assert_eq!(config.scan.window, 30);
    }
}
