// ABOUTME: Environment-driven configuration for the learnpath binary
// ABOUTME: Data directory, log filter and backup compression settings

use learnpath_core::{learnpath_dir, state_file_in};
use std::env;
use std::path::PathBuf;
use thiserror::Error;

pub const DATA_DIR_VAR: &str = "LEARNPATH_DATA_DIR";
pub const LOG_VAR: &str = "LEARNPATH_LOG";
pub const COMPRESS_VAR: &str = "LEARNPATH_COMPRESS_BACKUPS";

const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{var} must not be empty")]
    EmptyValue { var: &'static str },
    #[error("Invalid boolean for {var}: {value}")]
    InvalidBool { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub data_dir: PathBuf,
    pub log_filter: String,
    pub compress_backups: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let data_dir = match env::var(DATA_DIR_VAR) {
            Ok(value) => expand_home(non_empty(DATA_DIR_VAR, value)?),
            Err(_) => learnpath_dir(),
        };

        let log_filter = match env::var(LOG_VAR) {
            Ok(value) => non_empty(LOG_VAR, value)?,
            Err(_) => DEFAULT_LOG_FILTER.to_string(),
        };

        let compress_backups = match env::var(COMPRESS_VAR) {
            Ok(value) => parse_bool(COMPRESS_VAR, &value)?,
            Err(_) => false,
        };

        Ok(Config {
            data_dir,
            log_filter,
            compress_backups,
        })
    }

    /// Snapshot file inside the data directory
    pub fn state_file(&self) -> PathBuf {
        state_file_in(&self.data_dir)
    }
}

fn non_empty(var: &'static str, value: String) -> Result<String, ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::EmptyValue { var });
    }
    Ok(trimmed.to_string())
}

fn parse_bool(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            var,
            value: value.to_string(),
        }),
    }
}

fn expand_home(path: String) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}
