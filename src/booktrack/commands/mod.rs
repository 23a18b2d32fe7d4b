//! # Command Layer
//!
//! One module per step of a run: [`load`] the catalog, then one of
//! [`search`] or [`add`]. Commands take plain Rust values, never print, and
//! report back through [`CmdResult`] and the shared [`Summary`].
//!
//! Expected failures (a bad line, a duplicate ISBN, a malformed record to
//! add) are logged to the error sink, counted, and turned into an
//! [`Outcome::Failed`]. Only I/O on the catalog file is returned as `Err`.

use crate::error::{CatalogError, FailureKind};
use crate::errlog::{self, ErrorSink};
use crate::model::Book;
use serde::Serialize;

pub mod add;
pub mod load;
pub mod search;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Counters reported at the end of every run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub records_processed: usize,
    pub search_results: usize,
    pub books_added: usize,
    pub errors: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    TitleMatches { keyword: String, books: Vec<Book> },
    IsbnMatch { isbn: String, book: Option<Book> },
    Added { book: Book },
    Failed { kind: FailureKind, message: String },
    Skipped,
}

impl Outcome {
    pub fn failed(error: &CatalogError) -> Self {
        Outcome::Failed {
            kind: error.kind(),
            message: error.to_string(),
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failed { .. })
    }
}

#[derive(Debug, Clone)]
pub struct CmdResult {
    pub outcome: Outcome,
    pub messages: Vec<CmdMessage>,
}

impl Default for CmdResult {
    fn default() -> Self {
        Self {
            outcome: Outcome::Skipped,
            messages: Vec::new(),
        }
    }
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_outcome(mut self, outcome: Outcome) -> Self {
        self.outcome = outcome;
        self
    }
}

/// Logs an expected failure, counts it, and returns the warning raised if
/// the error log itself could not be written.
pub(crate) fn log_failure<L: ErrorSink>(
    sink: &L,
    input: &str,
    error: &CatalogError,
    summary: &mut Summary,
) -> Option<CmdMessage> {
    summary.errors += 1;
    errlog::record(sink, input, error).map(CmdMessage::warning)
}
