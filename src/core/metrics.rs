//! Logger metrics
//!
//! Sink failures are never reported through the logger itself, so these
//! counters are the only place they show up.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters describing what the logger has done so far
///
/// # Example
///
/// ```
/// use cutelog::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
/// metrics.record_dispatched();
/// metrics.record_sink_failure();
///
/// assert_eq!(metrics.total_dispatched(), 1);
/// assert_eq!(metrics.sink_failures(), 1);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Records that were formatted and handed to the sinks
    total_dispatched: AtomicU64,

    /// Lines written to the console
    console_lines: AtomicU64,

    /// Lines written to the log file
    file_lines: AtomicU64,

    /// Failed sink opens and writes
    sink_failures: AtomicU64,
}

impl LoggerMetrics {
    pub const fn new() -> Self {
        Self {
            total_dispatched: AtomicU64::new(0),
            console_lines: AtomicU64::new(0),
            file_lines: AtomicU64::new(0),
            sink_failures: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn total_dispatched(&self) -> u64 {
        self.total_dispatched.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn console_lines(&self) -> u64 {
        self.console_lines.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn file_lines(&self) -> u64 {
        self.file_lines.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn sink_failures(&self) -> u64 {
        self.sink_failures.load(Ordering::Relaxed)
    }

    /// Record a dispatched record, returning the previous count
    #[inline]
    pub fn record_dispatched(&self) -> u64 {
        self.total_dispatched.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_console_line(&self) -> u64 {
        self.console_lines.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_file_line(&self) -> u64 {
        self.file_lines.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_sink_failure(&self) -> u64 {
        self.sink_failures.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for LoggerMetrics {
    /// Snapshot of the current values
    fn clone(&self) -> Self {
        Self {
            total_dispatched: AtomicU64::new(self.total_dispatched()),
            console_lines: AtomicU64::new(self.console_lines()),
            file_lines: AtomicU64::new(self.file_lines()),
            sink_failures: AtomicU64::new(self.sink_failures()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_new() {
        let metrics = LoggerMetrics::new();
        assert_eq!(metrics.total_dispatched(), 0);
        assert_eq!(metrics.console_lines(), 0);
        assert_eq!(metrics.file_lines(), 0);
        assert_eq!(metrics.sink_failures(), 0);
    }

    #[test]
    fn test_record_returns_previous_value() {
        let metrics = LoggerMetrics::new();
        assert_eq!(metrics.record_file_line(), 0);
        assert_eq!(metrics.record_file_line(), 1);
        assert_eq!(metrics.file_lines(), 2);
    }

    #[test]
    fn test_metrics_clone_is_snapshot() {
        let metrics = LoggerMetrics::new();
        metrics.record_console_line();

        let snapshot = metrics.clone();
        metrics.record_console_line();

        assert_eq!(snapshot.console_lines(), 1);
        assert_eq!(metrics.console_lines(), 2);
    }
}
