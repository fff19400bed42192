//! The assimilator error log.
//!
//! Failures are recorded as free-text lines appended to a single
//! `errors` file shared by every assimilator process of a project.
//! Appends rely on the OS atomic-append guarantee, so concurrent
//! processes keep their own handles without locking.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

use tracing::warn;

use crate::prelude::*;

/// Sink for assimilation error lines.
///
/// The router reports through this trait so tests can substitute an
/// in-memory sink for the on-disk log.
pub trait ErrorSink {
    /// Append one line. The line must carry its own terminator.
    fn append(&mut self, line: &str) -> Result<()>;
}

/// File-backed error log.
///
/// The file is opened in append mode on first use and the handle is
/// kept for the rest of the process lifetime. Only a failed open is
/// reported; write errors after a successful open are absorbed.
#[derive(Debug)]
pub struct AsreErrorLog {
    path: PathBuf,
    file: Option<File>,
}

impl AsreErrorLog {
    /// Log writing to `path`, typically [`AsreLayout::errors_path`].
    ///
    /// [`AsreLayout::errors_path`]: crate::layout::AsreLayout::errors_path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            file: None,
        }
    }

    fn open(&mut self) -> Result<&mut File> {
        if self.file.is_none() {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.path)
                .map_err(Error::LogOpen)?;
            self.file = Some(file);
        }
        Ok(self.file.as_mut().expect("log handle was just opened"))
    }
}

impl ErrorSink for AsreErrorLog {
    fn append(&mut self, line: &str) -> Result<()> {
        let path = self.path.clone();
        let file = self.open()?;
        if let Err(err) = file.write_all(line.as_bytes()).and_then(|_| file.flush()) {
            warn!("failed to append to error log {}: {err}", path.display());
        }
        Ok(())
    }
}

/// In-memory sink recording appended lines.
#[derive(Debug, Default)]
pub struct MemoryErrorLog {
    lines: Vec<String>,
}

impl MemoryErrorLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines appended so far.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl ErrorSink for MemoryErrorLog {
    fn append(&mut self, line: &str) -> Result<()> {
        self.lines.push(line.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_is_not_created_before_first_append() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("errors");
        let mut log = AsreErrorLog::new(&path);
        assert!(!path.exists());

        log.append("first\n").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_appends_accumulate() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("errors");
        let mut log = AsreErrorLog::new(&path);

        log.append("first\n").unwrap();
        log.append("second\n").unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "first\nsecond\n");
    }

    #[test]
    fn test_open_failure_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("errors");
        let mut log = AsreErrorLog::new(&path);

        match log.append("line\n") {
            Err(Error::LogOpen(_)) => {}
            other => panic!("Expected LogOpen, got {:?}", other),
        }
    }

    #[test]
    fn test_memory_sink_records_lines() {
        let mut sink = MemoryErrorLog::new();
        sink.append("one\n").unwrap();
        sink.append("two\n").unwrap();
        assert_eq!(sink.lines(), ["one\n", "two\n"]);
    }
}
