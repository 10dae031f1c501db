//! Logger configuration and environment seeding

use super::log_level::LogLevel;
use super::timestamp::TimestampFormat;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Variable holding the minimum console level name, e.g. `DEBUG`
pub const LEVEL_ENV: &str = "CUTELOG_LEVEL";

/// Variable holding the path of the append-only log file
pub const FILE_ENV: &str = "CUTELOG_FILE";

/// Settings a [`Logger`](super::Logger) is built from
///
/// # Examples
///
/// ```
/// use cutelog::{LogLevel, LoggerConfig};
///
/// let config = LoggerConfig::from_lookup(|name| match name {
///     "CUTELOG_LEVEL" => Some("DEBUG".to_string()),
///     _ => None,
/// });
/// assert_eq!(config.min_level, LogLevel::Debug);
/// assert!(config.log_file.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerConfig {
    /// Lowest level shown on the console; the file sink ignores it
    pub min_level: LogLevel,
    /// Log file opened in append mode, if any
    pub log_file: Option<PathBuf>,
    /// Force console colors on or off; `None` detects a terminal
    pub use_colors: Option<bool>,
    pub timestamp_format: TimestampFormat,
}

impl LoggerConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read `CUTELOG_LEVEL` and `CUTELOG_FILE` from the process environment.
    ///
    /// Missing or unreadable variables leave the defaults in place.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a caller-supplied lookup.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let min_level = lookup(LEVEL_ENV)
            .map(|name| LogLevel::from_name(&name))
            .unwrap_or_default();
        let log_file = lookup(FILE_ENV)
            .filter(|path| !path.is_empty())
            .map(PathBuf::from);

        Self {
            min_level,
            log_file,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    #[must_use]
    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self
    }

    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = Some(use_colors);
        self
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }
}
