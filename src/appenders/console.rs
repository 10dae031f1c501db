//! Console appender implementation

use crate::core::{Appender, LogLevel, Result};
use std::io::{self, IsTerminal, Write};

// Escapes are written directly: `colored::Colorize` consults its own global
// `ShouldColorize`, which would override the terminal check made here.
const RESET: &str = "\x1b[0m";

pub struct ConsoleAppender {
    writer: Box<dyn Write + Send>,
    use_colors: bool,
}

impl ConsoleAppender {
    /// Console appender on stdout. Colors are enabled when stdout is a terminal.
    pub fn new() -> Self {
        Self {
            writer: Box::new(io::stdout()),
            use_colors: io::stdout().is_terminal(),
        }
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self {
            writer: Box::new(io::stdout()),
            use_colors,
        }
    }

    /// Console appender over an arbitrary writer, without colors
    ///
    /// # Example
    ///
    /// ```
    /// use cutelog::appenders::ConsoleAppender;
    ///
    /// let appender = ConsoleAppender::with_writer(std::io::stderr());
    /// assert!(!appender.use_colors());
    /// ```
    pub fn with_writer(writer: impl Write + Send + 'static) -> Self {
        Self {
            writer: Box::new(writer),
            use_colors: false,
        }
    }

    /// Override the color decision made at construction
    #[must_use]
    pub fn colored(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    pub fn use_colors(&self) -> bool {
        self.use_colors
    }

    fn decorate(&self, level: LogLevel, line: &str) -> String {
        if self.use_colors {
            format!("{}{}{}\n", level.ansi_prefix(), line, RESET)
        } else {
            format!("{}\n", line)
        }
    }
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Appender for ConsoleAppender {
    fn append(&mut self, level: LogLevel, line: &str) -> Result<()> {
        let output = self.decorate(level, line);
        self.writer.write_all(output.as_bytes())?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
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

    impl Capture {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock()).into_owned()
        }
    }

    #[test]
    fn test_plain_output() {
        let capture = Capture::default();
        let mut appender = ConsoleAppender::with_writer(capture.clone());
        appender.append(LogLevel::Info, "hello").unwrap();
        assert_eq!(capture.contents(), "hello\n");
    }

    #[test]
    fn test_colored_output() {
        let capture = Capture::default();
        let mut appender = ConsoleAppender::with_writer(capture.clone()).colored(true);
        appender.append(LogLevel::Warning, "careful").unwrap();
        appender.append(LogLevel::Fatal, "boom").unwrap();
        assert_eq!(
            capture.contents(),
            "\x1b[33mcareful\x1b[0m\n\x1b[1;31mboom\x1b[0m\n"
        );
    }
}
