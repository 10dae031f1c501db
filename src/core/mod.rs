//! Core logger types and traits

pub mod appender;
pub mod call_site;
pub mod config;
pub mod error;
pub mod formatter;
pub mod log_level;
pub mod log_record;
pub mod logger;
pub mod metrics;
pub mod timestamp;

pub use appender::Appender;
pub use call_site::CallSite;
pub use config::{LoggerConfig, FILE_ENV, LEVEL_ENV};
pub use error::{LoggerError, Result};
pub use log_level::LogLevel;
pub use log_record::LogRecord;
pub use logger::{Logger, LoggerBuilder};
pub use metrics::LoggerMetrics;
pub use timestamp::TimestampFormat;
