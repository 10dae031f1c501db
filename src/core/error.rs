//! Error types for the logger

use std::path::Path;

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Template and arguments do not agree
    #[error("Format mismatch in template {template:?}: {message}")]
    FormatMismatch { template: String, message: String },

    /// IO error with context
    #[error("IO error while {operation} '{path}': {source}")]
    IoOperation {
        operation: String,
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Level name that strict parsing does not recognize
    #[error("Invalid log level: '{0}'")]
    InvalidLevel(String),
}

impl LoggerError {
    /// Create a format mismatch error for a template
    pub fn format_mismatch(template: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::FormatMismatch {
            template: template.into(),
            message: message.into(),
        }
    }

    /// Create an IO operation error with the path it concerns
    pub fn io_operation(
        operation: impl Into<String>,
        path: impl AsRef<Path>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            path: path.as_ref().display().to_string(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LoggerError::format_mismatch("value={}", "missing argument for placeholder 0");
        assert_eq!(
            err.to_string(),
            "Format mismatch in template \"value={}\": missing argument for placeholder 0"
        );

        let err = LoggerError::InvalidLevel("bogus".to_string());
        assert_eq!(err.to_string(), "Invalid log level: 'bogus'");
    }

    #[test]
    fn test_io_operation_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = LoggerError::io_operation("opening log file", "/var/log/app.log", io_err);

        assert!(matches!(err, LoggerError::IoOperation { .. }));
        assert!(err.to_string().contains("opening log file"));
        assert!(err.to_string().contains("/var/log/app.log"));
    }
}
