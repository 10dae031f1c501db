//! Appender trait for log output destinations

use super::{error::Result, log_level::LogLevel};

/// A sink for fully rendered log lines.
///
/// `line` carries no trailing newline. Implementations must emit each line
/// with a single write so concurrent records never interleave.
pub trait Appender: Send {
    fn append(&mut self, level: LogLevel, line: &str) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
}
