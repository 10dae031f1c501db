//! # cutelog
//!
//! A small logging library. Each call is stamped with the local time and
//! the caller's `file:line`, then written as
//!
//! ```text
//! <timestamp> <file>:<line> [<LEVEL>] <message>
//! ```
//!
//! to the console (colored on a terminal) when the level reaches the
//! threshold, and to the log file unconditionally.
//!
//! ## Features
//!
//! - **Compile-time checked templates** through the per-level macros
//! - **Call-site capture** without passing locations by hand
//! - **Thread safe**: one write per line on each sink
//! - **Environment seeded**: `CUTELOG_LEVEL` and `CUTELOG_FILE` are read once,
//!   on first use of the process-wide logger

pub mod appenders;
pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{ConsoleAppender, FileAppender};
    pub use crate::core::{
        Appender, CallSite, LogLevel, LogRecord, Logger, LoggerBuilder, LoggerConfig, LoggerError,
        LoggerMetrics, Result, TimestampFormat,
    };
}

pub use appenders::{ConsoleAppender, FileAppender};
pub use crate::core::logger::{clear_log_file, flush, global, min_level, set_log_file, set_min_level};
pub use crate::core::{
    Appender, CallSite, LogLevel, LogRecord, Logger, LoggerBuilder, LoggerConfig, LoggerError,
    LoggerMetrics, Result, TimestampFormat, FILE_ENV, LEVEL_ENV,
};
