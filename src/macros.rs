//! Logging macros for ergonomic log message formatting.
//!
//! The macros capture `file!()`/`line!()` at the invocation, so the reported
//! location is the caller's. Templates are checked at compile time exactly
//! like `format!`. Every macro evaluates to `cutelog::Result<()>`.
//!
//! Without a prefix they log through [`global`](crate::global); prefix a
//! logger and `=>` to use a specific one.
//!
//! # Examples
//!
//! ```
//! use cutelog::prelude::*;
//! use cutelog::info;
//!
//! # fn main() -> cutelog::Result<()> {
//! // Process-wide logger
//! info!("Server started")?;
//!
//! // With format arguments
//! let port = 8080;
//! info!("Server listening on port {}", port)?;
//!
//! // Explicit logger
//! let logger = Logger::new();
//! info!(logger => "User {} performed action: {}", 42, "login")?;
//! # Ok(())
//! # }
//! ```

/// Log a message at a level chosen at runtime.
///
/// # Examples
///
/// ```
/// # use cutelog::prelude::*;
/// # let logger = Logger::new();
/// use cutelog::log;
/// log!(logger => LogLevel::Info, "Simple message").unwrap();
/// log!(LogLevel::Error, "Error code: {}", 500).unwrap();
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr => $level:expr, $($arg:tt)+) => {
        $logger.log(
            $level,
            $crate::CallSite::new(file!(), line!()).with_module(module_path!()),
            format_args!($($arg)+),
        )
    };
    ($level:expr, $($arg:tt)+) => {
        $crate::log!($crate::global() => $level, $($arg)+)
    };
}

/// Log a trace-level message.
#[macro_export]
macro_rules! trace {
    ($logger:expr => $($arg:tt)+) => {
        $crate::log!($logger => $crate::LogLevel::Trace, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::LogLevel::Trace, $($arg)+)
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr => $($arg:tt)+) => {
        $crate::log!($logger => $crate::LogLevel::Debug, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// use cutelog::info;
/// info!("Processing {} items", 100).unwrap();
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr => $($arg:tt)+) => {
        $crate::log!($logger => $crate::LogLevel::Info, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a critical-level message.
///
/// `Critical` sorts below `Warning`, so a `Warning` threshold hides it on
/// the console.
#[macro_export]
macro_rules! critical {
    ($logger:expr => $($arg:tt)+) => {
        $crate::log!($logger => $crate::LogLevel::Critical, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::LogLevel::Critical, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warning {
    ($logger:expr => $($arg:tt)+) => {
        $crate::log!($logger => $crate::LogLevel::Warning, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::LogLevel::Warning, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr => $($arg:tt)+) => {
        $crate::log!($logger => $crate::LogLevel::Error, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a fatal-level message.
#[macro_export]
macro_rules! fatal {
    ($logger:expr => $($arg:tt)+) => {
        $crate::log!($logger => $crate::LogLevel::Fatal, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::LogLevel::Fatal, $($arg)+)
    };
}

/// Log `expr=value` at debug level.
///
/// # Examples
///
/// ```
/// use cutelog::debug_var;
/// let retries = 3;
/// debug_var!(retries).unwrap(); // "... [DEBUG] retries=3"
/// ```
#[macro_export]
macro_rules! debug_var {
    ($logger:expr => $value:expr) => {
        $crate::debug!($logger => concat!(stringify!($value), "={}"), $value)
    };
    ($value:expr) => {
        $crate::debug!(concat!(stringify!($value), "={}"), $value)
    };
}

#[cfg(test)]
mod tests {
    use crate::appenders::ConsoleAppender;
    use crate::core::{LogLevel, Logger};
    use parking_lot::Mutex;
    use std::io::{self, Write};
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn capturing_logger() -> (Logger, Capture) {
        let capture = Capture::default();
        let logger = Logger::builder()
            .min_level(LogLevel::Trace)
            .console(ConsoleAppender::with_writer(capture.clone()))
            .build();
        (logger, capture)
    }

    fn output(capture: &Capture) -> String {
        String::from_utf8_lossy(&capture.0.lock()).into_owned()
    }

    #[test]
    fn test_log_macro() {
        let (logger, capture) = capturing_logger();
        log!(logger => LogLevel::Info, "Test message").unwrap();
        log!(logger => LogLevel::Info, "Formatted: {}", 42).unwrap();
        assert!(output(&capture).contains("[INFO] Formatted: 42"));
    }

    #[test]
    fn test_level_macros() {
        let (logger, capture) = capturing_logger();
        trace!(logger => "Value: {}", 10).unwrap();
        debug!(logger => "Count: {}", 5).unwrap();
        info!(logger => "Items: {}", 100).unwrap();
        critical!(logger => "Disk {} failing", "sda").unwrap();
        warning!(logger => "Retry {} of {}", 1, 3).unwrap();
        error!(logger => "Code: {}", 500).unwrap();
        fatal!(logger => "Critical failure: {}", "system").unwrap();

        let out = output(&capture);
        for tag in ["TRACE", "DEBUG", "INFO", "CRITICAL", "WARNING", "ERROR", "FATAL"] {
            assert!(out.contains(&format!("[{}]", tag)), "missing {}", tag);
        }
        assert_eq!(out.lines().count(), 7);
    }

    #[test]
    fn test_macro_reports_invocation_line() {
        let (logger, capture) = capturing_logger();
        let line = line!() + 1;
        info!(logger => "here").unwrap();
        assert!(output(&capture).contains(&format!("macros.rs:{} [INFO] here", line)));
    }

    #[test]
    fn test_debug_var() {
        let (logger, capture) = capturing_logger();
        let answer = 42;
        debug_var!(logger => answer).unwrap();
        assert!(output(&capture).contains("[DEBUG] answer=42"));
    }

    #[test]
    fn test_global_macros() {
        info!("Global message {}", 1).unwrap();
        debug_var!(1 + 1).unwrap();
    }
}
