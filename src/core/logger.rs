//! Main logger implementation
//!
//! A [`Logger`] owns one console sink and at most one file sink. Every log
//! call goes through [`Logger::log`]: the message is rendered, the line is
//! written to the file sink regardless of level, and then to the console if
//! the level reaches the configured threshold.

use super::{
    appender::Appender,
    call_site::CallSite,
    config::LoggerConfig,
    error::Result,
    formatter,
    log_level::LogLevel,
    log_record::LogRecord,
    metrics::LoggerMetrics,
    timestamp::TimestampFormat,
};
use crate::appenders::{ConsoleAppender, FileAppender};
use parking_lot::{Mutex, RwLock};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

pub struct Logger {
    min_level: RwLock<LogLevel>,
    console: Mutex<ConsoleAppender>,
    file: Mutex<Option<FileAppender>>,
    timestamp_format: TimestampFormat,
    metrics: LoggerMetrics,
}

impl Logger {
    /// Logger at `Info` writing to stdout, with no log file.
    #[must_use]
    pub fn new() -> Self {
        Self::with_console(ConsoleAppender::new())
    }

    fn with_console(console: ConsoleAppender) -> Self {
        Self {
            min_level: RwLock::new(LogLevel::Info),
            console: Mutex::new(console),
            file: Mutex::new(None),
            timestamp_format: TimestampFormat::default(),
            metrics: LoggerMetrics::new(),
        }
    }

    /// Build a logger from explicit settings.
    ///
    /// A log file that cannot be opened leaves the file sink disabled and
    /// counts one sink failure; construction itself never fails.
    #[must_use]
    pub fn from_config(config: LoggerConfig) -> Self {
        let console = match config.use_colors {
            Some(use_colors) => ConsoleAppender::with_colors(use_colors),
            None => ConsoleAppender::new(),
        };

        let mut logger = Self::with_console(console);
        logger.timestamp_format = config.timestamp_format;
        logger.set_min_level(config.min_level);
        if let Some(path) = config.log_file {
            let _ = logger.set_log_file(path);
        }
        logger
    }

    /// Build a logger from `CUTELOG_LEVEL` and `CUTELOG_FILE`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_config(LoggerConfig::from_env())
    }

    pub fn set_min_level(&self, level: LogLevel) {
        *self.min_level.write() = level;
    }

    pub fn min_level(&self) -> LogLevel {
        *self.min_level.read()
    }

    /// Open `path` in append mode as the file sink, closing any previous file.
    ///
    /// If the open fails the previous file is still closed and the file sink
    /// stays disabled until the next successful call.
    pub fn set_log_file(&self, path: impl Into<PathBuf>) -> Result<()> {
        let mut file = self.file.lock();
        file.take();
        match FileAppender::new(path) {
            Ok(appender) => {
                *file = Some(appender);
                Ok(())
            }
            Err(e) => {
                self.metrics.record_sink_failure();
                Err(e)
            }
        }
    }

    /// Close the file sink, if one is open.
    pub fn clear_log_file(&self) {
        self.file.lock().take();
    }

    pub fn log_file(&self) -> Option<PathBuf> {
        self.file.lock().as_ref().map(|f| f.path().to_path_buf())
    }

    /// Render `args` and dispatch the result.
    ///
    /// Only a failing `Display` impl can make this return an error; sink
    /// failures are counted in [`metrics`](Self::metrics) and otherwise
    /// ignored.
    pub fn log(&self, level: LogLevel, call_site: CallSite, args: fmt::Arguments<'_>) -> Result<()> {
        let message = formatter::render_args(args)?;
        self.dispatch(LogRecord::new(level, call_site, message));
        Ok(())
    }

    /// Render a runtime template and dispatch the result.
    ///
    /// # Example
    ///
    /// ```
    /// use cutelog::{CallSite, LogLevel, Logger, LoggerError};
    ///
    /// let logger = Logger::new();
    /// let site = CallSite::new("app.src", 10);
    ///
    /// let err = logger.log_template(LogLevel::Info, site, "{} and {}", &[&1]);
    /// assert!(matches!(err, Err(LoggerError::FormatMismatch { .. })));
    /// ```
    pub fn log_template(
        &self,
        level: LogLevel,
        call_site: CallSite,
        template: &str,
        args: &[&dyn fmt::Display],
    ) -> Result<()> {
        let message = formatter::render(template, args)?;
        self.dispatch(LogRecord::new(level, call_site, message));
        Ok(())
    }

    fn dispatch(&self, record: LogRecord) {
        let line = record.render(&self.timestamp_format);
        self.metrics.record_dispatched();

        if let Some(file) = self.file.lock().as_mut() {
            match file.append(record.level, &line) {
                Ok(()) => self.metrics.record_file_line(),
                Err(_) => self.metrics.record_sink_failure(),
            };
        }

        if record.level >= self.min_level() {
            match self.console.lock().append(record.level, &line) {
                Ok(()) => self.metrics.record_console_line(),
                Err(_) => self.metrics.record_sink_failure(),
            };
        }
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    pub fn flush(&self) -> Result<()> {
        self.console.lock().flush()?;
        if let Some(file) = self.file.lock().as_mut() {
            file.flush()?;
        }
        Ok(())
    }

    #[inline]
    #[track_caller]
    pub fn trace(&self, args: fmt::Arguments<'_>) -> Result<()> {
        self.log(LogLevel::Trace, CallSite::caller(), args)
    }

    #[inline]
    #[track_caller]
    pub fn debug(&self, args: fmt::Arguments<'_>) -> Result<()> {
        self.log(LogLevel::Debug, CallSite::caller(), args)
    }

    #[inline]
    #[track_caller]
    pub fn info(&self, args: fmt::Arguments<'_>) -> Result<()> {
        self.log(LogLevel::Info, CallSite::caller(), args)
    }

    #[inline]
    #[track_caller]
    pub fn critical(&self, args: fmt::Arguments<'_>) -> Result<()> {
        self.log(LogLevel::Critical, CallSite::caller(), args)
    }

    #[inline]
    #[track_caller]
    pub fn warning(&self, args: fmt::Arguments<'_>) -> Result<()> {
        self.log(LogLevel::Warning, CallSite::caller(), args)
    }

    #[inline]
    #[track_caller]
    pub fn error(&self, args: fmt::Arguments<'_>) -> Result<()> {
        self.log(LogLevel::Error, CallSite::caller(), args)
    }

    #[inline]
    #[track_caller]
    pub fn fatal(&self, args: fmt::Arguments<'_>) -> Result<()> {
        self.log(LogLevel::Fatal, CallSite::caller(), args)
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use cutelog::prelude::*;
///
/// let logger = Logger::builder()
///     .min_level(LogLevel::Debug)
///     .console(ConsoleAppender::with_writer(std::io::sink()))
///     .timestamp_format(TimestampFormat::Rfc3339)
///     .build();
/// assert_eq!(logger.min_level(), LogLevel::Debug);
/// ```
pub struct LoggerBuilder {
    min_level: LogLevel,
    console: Option<ConsoleAppender>,
    file: Option<FileAppender>,
    timestamp_format: TimestampFormat,
}

impl LoggerBuilder {
    pub fn new() -> Self {
        Self {
            min_level: LogLevel::Info,
            console: None,
            file: None,
            timestamp_format: TimestampFormat::default(),
        }
    }

    /// Set minimum console level
    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Replace the default stdout console sink
    #[must_use = "builder methods return a new value"]
    pub fn console(mut self, console: ConsoleAppender) -> Self {
        self.console = Some(console);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn file_appender(mut self, file: FileAppender) -> Self {
        self.file = Some(file);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    pub fn build(self) -> Logger {
        let mut logger = Logger::with_console(self.console.unwrap_or_default());
        logger.timestamp_format = self.timestamp_format;
        logger.set_min_level(self.min_level);
        *logger.file.get_mut() = self.file;
        logger
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}

static GLOBAL: OnceLock<Logger> = OnceLock::new();

/// The process-wide logger used by the logging macros.
///
/// Initialized from the environment on first use, exactly once.
pub fn global() -> &'static Logger {
    GLOBAL.get_or_init(Logger::from_env)
}

/// Set the console threshold of the process-wide logger
pub fn set_min_level(level: LogLevel) {
    global().set_min_level(level);
}

pub fn min_level() -> LogLevel {
    global().min_level()
}

/// Point the process-wide logger at a new log file
pub fn set_log_file(path: impl AsRef<Path>) -> Result<()> {
    global().set_log_file(path.as_ref())
}

pub fn clear_log_file() {
    global().clear_log_file();
}

pub fn flush() -> Result<()> {
    global().flush()
}
