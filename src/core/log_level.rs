//! Log level definitions
//!
//! Levels compare by declaration order. Note that `Critical` is declared
//! between `Info` and `Warning`, so a threshold of `Warning` hides
//! `Critical` records on the console.

use super::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
#[serde(rename_all = "UPPERCASE")]
#[repr(u8)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    #[default]
    Info = 2,
    Critical = 3,
    Warning = 4,
    Error = 5,
    Fatal = 6,
}

/// Level/name table, indexed by discriminant.
const LEVEL_NAMES: [(LogLevel, &str); 7] = [
    (LogLevel::Trace, "TRACE"),
    (LogLevel::Debug, "DEBUG"),
    (LogLevel::Info, "INFO"),
    (LogLevel::Critical, "CRITICAL"),
    (LogLevel::Warning, "WARNING"),
    (LogLevel::Error, "ERROR"),
    (LogLevel::Fatal, "FATAL"),
];

impl LogLevel {
    /// Every level, in declaration (comparison) order.
    pub const ALL: [LogLevel; 7] = [
        LogLevel::Trace,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Critical,
        LogLevel::Warning,
        LogLevel::Error,
        LogLevel::Fatal,
    ];

    pub fn name(&self) -> &'static str {
        LEVEL_NAMES[*self as usize].1
    }

    /// Name for a raw discriminant, `"unknown"` when out of range.
    pub fn name_of(raw: u8) -> &'static str {
        match Self::from_u8(raw) {
            Some(level) => level.name(),
            None => "unknown",
        }
    }

    pub fn from_u8(raw: u8) -> Option<Self> {
        LEVEL_NAMES.get(raw as usize).map(|(level, _)| *level)
    }

    /// Resolve a level name, falling back to `Info` for anything unrecognized.
    ///
    /// Matching is case-sensitive: `"info"` resolves to `Info` only through
    /// the fallback.
    ///
    /// # Examples
    ///
    /// ```
    /// use cutelog::LogLevel;
    ///
    /// assert_eq!(LogLevel::from_name("ERROR"), LogLevel::Error);
    /// assert_eq!(LogLevel::from_name("bogus"), LogLevel::Info);
    /// ```
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }

    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            LogLevel::Trace => White,
            LogLevel::Debug => Magenta,
            LogLevel::Info => Green,
            LogLevel::Critical => Blue,
            LogLevel::Warning => Yellow,
            LogLevel::Error | LogLevel::Fatal => Red,
        }
    }

    /// ANSI escape that starts this level's console color.
    ///
    /// Built from the `colored` palette but not through `Colorize`, whose
    /// global override would ignore the console's own terminal check.
    pub fn ansi_prefix(&self) -> String {
        let fg = self.color_code().to_fg_str();
        match self {
            LogLevel::Fatal => format!("\x1b[1;{}m", fg),
            _ => format!("\x1b[{}m", fg),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LogLevel {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LEVEL_NAMES
            .iter()
            .find(|(_, name)| *name == s)
            .map(|(level, _)| *level)
            .ok_or_else(|| LoggerError::InvalidLevel(s.to_string()))
    }
}
