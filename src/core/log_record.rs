//! Log record structure

use super::call_site::CallSite;
use super::log_level::LogLevel;
use super::timestamp::TimestampFormat;
use chrono::{DateTime, Local};

/// One dispatched log call, consumed by the sinks and then dropped.
#[derive(Debug, Clone)]
pub struct LogRecord {
    pub level: LogLevel,
    pub message: String,
    pub timestamp: DateTime<Local>,
    pub call_site: CallSite,
}

impl LogRecord {
    /// Sanitize log message to prevent log injection attacks
    ///
    /// Replaces newlines and carriage returns with escape sequences so one
    /// record is always one line. Everything else passes through untouched.
    fn sanitize_message(message: String) -> String {
        if !message.contains(['\n', '\r']) {
            return message;
        }
        message.replace('\n', "\\n").replace('\r', "\\r")
    }

    pub fn new(level: LogLevel, call_site: CallSite, message: String) -> Self {
        Self {
            level,
            message: Self::sanitize_message(message),
            timestamp: Local::now(),
            call_site,
        }
    }

    /// `{timestamp} {file}:{line} [{LEVEL}] {message}`, without a newline.
    pub fn render(&self, timestamp_format: &TimestampFormat) -> String {
        format!(
            "{} {}:{} [{}] {}",
            timestamp_format.format(&self.timestamp),
            self.call_site.file,
            self.call_site.line,
            self.level.name(),
            self.message
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_layout() {
        let record = LogRecord::new(
            LogLevel::Info,
            CallSite::new("app.src", 10),
            "value=43".to_string(),
        );
        let line = record.render(&TimestampFormat::Custom("T".to_string()));
        assert_eq!(line, "T app.src:10 [INFO] value=43");
    }

    #[test]
    fn test_message_is_single_line() {
        let record = LogRecord::new(
            LogLevel::Error,
            CallSite::new("app.src", 1),
            "User login\nERROR fake entry\r".to_string(),
        );
        assert_eq!(record.message, "User login\\nERROR fake entry\\r");
        assert_eq!(record.render(&TimestampFormat::Local).lines().count(), 1);
    }

    #[test]
    fn test_tabs_pass_through() {
        let record = LogRecord::new(
            LogLevel::Info,
            CallSite::new("app.src", 10),
            "col1\tcol2".to_string(),
        );
        assert_eq!(record.message, "col1\tcol2");
        let line = record.render(&TimestampFormat::Custom("T".to_string()));
        assert_eq!(line, "T app.src:10 [INFO] col1\tcol2");
    }
}
