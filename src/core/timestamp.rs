//! Timestamp formatting
//!
//! Records are stamped with the local zoned time. The default rendering
//! keeps the UTC offset so lines from machines in different zones can be
//! compared.

use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Write};

const LOCAL_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f %:z";

/// Timestamp format options
///
/// # Examples
///
/// ```
/// use cutelog::TimestampFormat;
/// use chrono::Local;
///
/// let stamp = TimestampFormat::Local.format(&Local::now());
/// // "2025-01-08 10:30:45.123456 +08:00"
/// assert_eq!(stamp.len(), 33);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// Local time with microseconds and offset: `2025-01-08 10:30:45.123456 +08:00`
    #[default]
    Local,

    /// ISO 8601 with milliseconds and offset: `2025-01-08T10:30:45.123+08:00`
    Iso8601,

    /// RFC 3339: `2025-01-08T10:30:45.123456+08:00`
    Rfc3339,

    /// Custom strftime format
    ///
    /// An invalid pattern falls back to [`TimestampFormat::Local`] rather
    /// than failing the log call.
    Custom(String),
}

impl TimestampFormat {
    #[must_use]
    pub fn format<Tz>(&self, datetime: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        match self {
            TimestampFormat::Local => datetime.format(LOCAL_FORMAT).to_string(),
            TimestampFormat::Iso8601 => datetime.format("%Y-%m-%dT%H:%M:%S%.3f%:z").to_string(),
            TimestampFormat::Rfc3339 => datetime.to_rfc3339(),
            TimestampFormat::Custom(format_str) => {
                let mut out = String::new();
                if write!(out, "{}", datetime.format(format_str)).is_err() {
                    return datetime.format(LOCAL_FORMAT).to_string();
                }
                out
            }
        }
    }
}
