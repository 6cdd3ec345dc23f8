//! Runtime configuration for the task board.
//!
//! Values are resolved with the following priority (highest first):
//! 1. Environment variables (`TASKBOARD_DATABASE_URL`,
//!    `TASKBOARD_DB_MAX_CONNECTIONS`, `TASKBOARD_LOG`)
//! 2. TOML config file
//! 3. Compiled defaults

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable overriding [`DatabaseConfig::url`].
pub const DATABASE_URL_ENV: &str = "TASKBOARD_DATABASE_URL";
/// Environment variable overriding [`DatabaseConfig::max_connections`].
pub const MAX_CONNECTIONS_ENV: &str = "TASKBOARD_DB_MAX_CONNECTIONS";
/// Environment variable overriding [`LogConfig::level`].
pub const LOG_LEVEL_ENV: &str = "TASKBOARD_LOG";

const DEFAULT_DATABASE_URL: &str = "postgres://localhost/taskboard";
const DEFAULT_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_LOG_LEVEL: &str = "info";

/// Errors that can occur when loading board configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to parse the TOML configuration.
    #[error("failed to parse config file: {0}")]
    ParseToml(#[from] toml::de::Error),

    /// A value was present but unusable.
    #[error("invalid value for {key}: {reason}")]
    InvalidValue {
        /// Setting that was rejected.
        key: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

/// Fully resolved board configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BoardConfig {
    /// `[database]` section.
    pub database: DatabaseConfig,
    /// `[log]` section.
    pub log: LogConfig,
}

/// `PostgreSQL` connection settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DatabaseConfig {
    /// Connection URL passed to the pool manager.
    pub url: String,
    /// Upper bound of pooled connections.
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_DATABASE_URL.to_owned(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

/// Output format of log events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
    /// Filter directive, e.g. `info` or `taskboard=debug`.
    pub level: String,
    /// Output format.
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_owned(),
            format: LogFormat::default(),
        }
    }
}

impl BoardConfig {
    /// Parses configuration from TOML text. Missing keys take defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ParseToml`] for malformed TOML or unknown keys,
    /// and [`ConfigError::InvalidValue`] when a value fails validation.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file and applies environment
    /// overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file cannot be read or parsed, or a
    /// resolved value is invalid.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_toml_str(&contents)?;
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Applies overrides from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when an override cannot be used.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Applies overrides from `lookup`, which maps a variable name to its
    /// value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when an override cannot be used.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(DATABASE_URL_ENV) {
            self.database.url = url;
        }
        if let Some(raw) = lookup(MAX_CONNECTIONS_ENV) {
            let max_connections =
                raw.trim()
                    .parse::<u32>()
                    .map_err(|err| ConfigError::InvalidValue {
                        key: MAX_CONNECTIONS_ENV,
                        reason: err.to_string(),
                    })?;
            self.database.max_connections = max_connections;
        }
        if let Some(level) = lookup(LOG_LEVEL_ENV) {
            self.log.level = level;
        }
        self.validate()
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.database.url.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "database.url",
                reason: "must not be empty".to_owned(),
            });
        }
        if self.database.max_connections == 0 {
            return Err(ConfigError::InvalidValue {
                key: "database.max_connections",
                reason: "must be at least 1".to_owned(),
            });
        }
        if self.log.level.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "log.level",
                reason: "must not be empty".to_owned(),
            });
        }
        Ok(())
    }
}
