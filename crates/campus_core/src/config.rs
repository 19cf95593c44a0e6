//! Process configuration for core callers.
//!
//! # Responsibility
//! - Resolve log level, log directory and database location from the
//!   environment.
//! - Open the configured database.
//!
//! # Invariants
//! - Missing values fall back to defaults; malformed values are errors.
//! - `log_level` is always a normalized level name.

use crate::db::{open_db, open_db_in_memory, DbResult};
use crate::logging::{default_log_level, normalize_level, normalize_log_dir, LoggingError};
use rusqlite::Connection;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub const ENV_LOG_LEVEL: &str = "CAMPUS_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "CAMPUS_LOG_DIR";
pub const ENV_DB_PATH: &str = "CAMPUS_DB_PATH";

#[derive(Debug)]
pub struct ConfigError {
    pub key: &'static str,
    pub source: LoggingError,
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid `{}`: {}", self.key, self.source)
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}

/// Resolved core configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    pub log_level: &'static str,
    /// File logging is disabled when `None`.
    pub log_dir: Option<PathBuf>,
    /// An in-memory database is used when `None`.
    pub db_path: Option<PathBuf>,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_dir: None,
            db_path: None,
        }
    }
}

impl CoreConfig {
    /// Reads `CAMPUS_LOG_LEVEL`, `CAMPUS_LOG_DIR` and `CAMPUS_DB_PATH`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves configuration through an arbitrary key lookup.
    ///
    /// Blank values are treated as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let value = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let mut config = Self::default();

        if let Some(level) = value(ENV_LOG_LEVEL) {
            config.log_level = normalize_level(&level).map_err(|source| ConfigError {
                key: ENV_LOG_LEVEL,
                source,
            })?;
        }
        if let Some(dir) = value(ENV_LOG_DIR) {
            let dir = normalize_log_dir(&dir).map_err(|source| ConfigError {
                key: ENV_LOG_DIR,
                source,
            })?;
            config.log_dir = Some(dir);
        }
        config.db_path = value(ENV_DB_PATH).map(|path| PathBuf::from(path.trim()));

        Ok(config)
    }

    /// Opens the configured database with migrations applied.
    pub fn open_database(&self) -> DbResult<Connection> {
        match &self.db_path {
            Some(path) => open_db(path),
            None => open_db_in_memory(),
        }
    }
}
