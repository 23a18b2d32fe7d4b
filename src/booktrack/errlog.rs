//! # Error Log
//!
//! Rejected input is recorded in an append-only side file, one line per
//! failure:
//!
//! ```text
//! [2024-03-01T14:02:11] INVALID LINE: "Bad:Author:12:2" - InvalidISBN: ISBN must be exactly 13 digits, got: "12"
//! ```
//!
//! The log is only ever written. A failure to write it is turned into a
//! warning for the caller and never replaces the error being logged.

use crate::error::{CatalogError, FailureKind};
use chrono::{Local, NaiveDateTime};
use std::cell::RefCell;
use std::fmt;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub const DEFAULT_LOG_NAME: &str = "errors.log";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub timestamp: NaiveDateTime,
    pub input: String,
    pub kind: FailureKind,
    pub message: String,
}

impl LogEntry {
    pub fn now(input: impl Into<String>, error: &CatalogError) -> Self {
        Self {
            timestamp: Local::now().naive_local(),
            input: input.into(),
            kind: error.kind(),
            message: error.to_string(),
        }
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] INVALID LINE: \"{}\" - {}: {}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.input,
            self.kind,
            self.message
        )
    }
}

/// Destination for error log entries.
pub trait ErrorSink {
    fn append(&self, entry: &LogEntry) -> io::Result<()>;
}

/// Appends entries to a file, opening and closing it for every write.
#[derive(Debug, Clone)]
pub struct FileErrorLog {
    path: PathBuf,
}

impl FileErrorLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// A log named `log_name` next to the catalog file.
    pub fn beside(catalog_path: &Path, log_name: &str) -> Self {
        Self::new(log_path_for(catalog_path, log_name))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ErrorSink for FileErrorLog {
    fn append(&self, entry: &LogEntry) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", entry)
    }
}

/// Sibling of `catalog_path`, or a bare file name in the working directory
/// when the catalog path has no parent.
pub fn log_path_for(catalog_path: &Path, log_name: &str) -> PathBuf {
    match catalog_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.join(log_name),
        _ => PathBuf::from(log_name),
    }
}

/// Collects entries in memory. Used by tests.
#[derive(Debug, Default)]
pub struct MemoryErrorLog {
    entries: RefCell<Vec<LogEntry>>,
    fail_writes: bool,
}

impl MemoryErrorLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sink whose every write fails, for exercising the warning path.
    pub fn failing() -> Self {
        Self {
            entries: RefCell::default(),
            fail_writes: true,
        }
    }

    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl ErrorSink for MemoryErrorLog {
    fn append(&self, entry: &LogEntry) -> io::Result<()> {
        if self.fail_writes {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "error log is read-only",
            ));
        }
        self.entries.borrow_mut().push(entry.clone());
        Ok(())
    }
}

impl<T: ErrorSink + ?Sized> ErrorSink for &T {
    fn append(&self, entry: &LogEntry) -> io::Result<()> {
        (**self).append(entry)
    }
}

/// Logs `error` against the offending `input`.
///
/// Returns a warning message when the sink could not be written.
pub fn record<L: ErrorSink + ?Sized>(
    sink: &L,
    input: &str,
    error: &CatalogError,
) -> Option<String> {
    let entry = LogEntry::now(input, error);
    tracing::debug!(kind = %entry.kind, input, "recording failure");
    match sink.append(&entry) {
        Ok(()) => None,
        Err(e) => {
            tracing::warn!("could not write to error log: {}", e);
            Some(format!("Warning: Could not write to error log: {}", e))
        }
    }
}
