//! Core runtime configuration.
//!
//! # Responsibility
//! - Group logging and service settings behind one serde-loadable value.
//! - Resolve overrides from `NOTES_*` environment variables.
//!
//! # Invariants
//! - Missing keys fall back to defaults; malformed values are errors.

use crate::logging::default_log_level;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub const ENV_LOG_LEVEL: &str = "NOTES_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "NOTES_LOG_DIR";
pub const ENV_SERVICE_LATENCY_MS: &str = "NOTES_SERVICE_LATENCY_MS";

/// Configuration parse error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidValue { key: &'static str, value: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidValue { key, value } => {
                write!(f, "invalid value `{value}` for `{key}`")
            }
        }
    }
}

impl Error for ConfigError {}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// One of `trace|debug|info|warn|error`.
    pub level: String,
    /// Absolute directory for rolling log files; `None` logs to stderr.
    pub log_dir: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

/// Backing service settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Simulated answer latency; `0` answers inline on the calling thread.
    pub latency_ms: u64,
}

/// Top-level configuration for the notes core.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreConfig {
    pub logging: LoggingConfig,
    pub service: ServiceConfig,
}

impl CoreConfig {
    /// Builds configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(level) = non_blank(lookup(ENV_LOG_LEVEL)) {
            config.logging.level = level;
        }
        if let Some(dir) = non_blank(lookup(ENV_LOG_DIR)) {
            config.logging.log_dir = Some(PathBuf::from(dir));
        }
        if let Some(raw) = non_blank(lookup(ENV_SERVICE_LATENCY_MS)) {
            config.service.latency_ms =
                raw.parse().map_err(|_| ConfigError::InvalidValue {
                    key: ENV_SERVICE_LATENCY_MS,
                    value: raw.clone(),
                })?;
        }

        Ok(config)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_string())
        .filter(|raw| !raw.is_empty())
}
