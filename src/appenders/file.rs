//! File appender implementation

use crate::core::{Appender, LogLevel, LoggerError, Result};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Append-only log file.
///
/// Lines go straight to the file handle without a userspace buffer, so a
/// process that exits without dropping the logger loses nothing.
pub struct FileAppender {
    file: File,
    path: PathBuf,
}

impl FileAppender {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| LoggerError::io_operation("opening log file", &path, e))?;

        Ok(Self { file, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Appender for FileAppender {
    fn append(&mut self, _level: LogLevel, line: &str) -> Result<()> {
        let mut output = String::with_capacity(line.len() + 1);
        output.push_str(line);
        output.push('\n');

        self.file
            .write_all(output.as_bytes())
            .map_err(|e| LoggerError::io_operation("writing log file", &self.path, e))
    }

    fn flush(&mut self) -> Result<()> {
        self.file.flush()?;
        Ok(())
    }
}

impl Drop for FileAppender {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}
