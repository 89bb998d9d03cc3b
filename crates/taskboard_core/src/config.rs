//! Environment-based application configuration.
//!
//! # Responsibility
//! - Resolve data directory, listen address and logging options.
//! - Apply defaults for anything left unset.
//!
//! # Environment variables
//! - `TASKBOARD_DATA_DIR`: directory holding the CSV files (default `.`).
//! - `TASKBOARD_BIND`: listen address (default `127.0.0.1:5000`).
//! - `TASKBOARD_LOG_LEVEL`: `trace|debug|info|warn|error` (default by build mode).
//! - `TASKBOARD_LOG_DIR`: absolute directory for rolling log files (optional).

use crate::logging::{default_log_level, normalize_level};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;
use std::path::PathBuf;

pub const ENV_DATA_DIR: &str = "TASKBOARD_DATA_DIR";
pub const ENV_BIND: &str = "TASKBOARD_BIND";
pub const ENV_LOG_LEVEL: &str = "TASKBOARD_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "TASKBOARD_LOG_DIR";

pub const DEFAULT_DATA_DIR: &str = ".";
pub const DEFAULT_BIND: &str = "127.0.0.1:5000";

/// Configuration loading error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidEnvVar { key: String, message: String },
    InvalidValue(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidEnvVar { key, message } => {
                write!(f, "invalid environment variable `{key}`: {message}")
            }
            Self::InvalidValue(message) => write!(f, "invalid configuration: {message}"),
        }
    }
}

impl Error for ConfigError {}

/// Resolved runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub bind_addr: SocketAddr,
    pub log_level: &'static str,
    /// Rolling file logs are written here when set; stderr otherwise.
    pub log_dir: Option<PathBuf>,
}

impl AppConfig {
    /// Loads configuration from a key lookup, usually the process environment.
    ///
    /// Blank values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let data_dir = PathBuf::from(get(ENV_DATA_DIR).unwrap_or_else(|| DEFAULT_DATA_DIR.into()));

        let bind_text = get(ENV_BIND).unwrap_or_else(|| DEFAULT_BIND.into());
        let bind_addr = parse_bind(&bind_text).map_err(|message| ConfigError::InvalidEnvVar {
            key: ENV_BIND.to_string(),
            message,
        })?;

        let log_level = match get(ENV_LOG_LEVEL) {
            Some(level) => {
                normalize_level(&level).map_err(|message| ConfigError::InvalidEnvVar {
                    key: ENV_LOG_LEVEL.to_string(),
                    message,
                })?
            }
            None => default_log_level(),
        };

        let log_dir = get(ENV_LOG_DIR).map(PathBuf::from);

        let config = Self {
            data_dir,
            bind_addr,
            log_level,
            log_dir,
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks cross-field rules after overrides are applied.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue(
                "data_dir cannot be empty".to_string(),
            ));
        }
        if let Some(log_dir) = &self.log_dir {
            if !log_dir.is_absolute() {
                return Err(ConfigError::InvalidValue(format!(
                    "log_dir must be an absolute path, got `{}`",
                    log_dir.display()
                )));
            }
        }
        Ok(())
    }
}

/// Parses a `host:port` listen address.
pub fn parse_bind(value: &str) -> Result<SocketAddr, String> {
    value
        .trim()
        .parse::<SocketAddr>()
        .map_err(|err| format!("expected host:port, got `{value}`: {err}"))
}
