use serde::Serialize;
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("{0}")]
    InsufficientInput(String),

    #[error("{0}")]
    InvalidFileName(String),

    #[error("{0}")]
    MalformedEntry(String),

    #[error("ISBN must be exactly 13 digits, got: \"{0}\"")]
    InvalidIsbn(String),

    #[error("Found {count} books with ISBN {isbn}")]
    DuplicateIsbn { isbn: String, count: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl CatalogError {
    pub fn kind(&self) -> FailureKind {
        match self {
            CatalogError::InsufficientInput(_) => FailureKind::InsufficientInput,
            CatalogError::InvalidFileName(_) => FailureKind::InvalidFileName,
            CatalogError::MalformedEntry(_) => FailureKind::MalformedEntry,
            CatalogError::InvalidIsbn(_) => FailureKind::InvalidIsbn,
            CatalogError::DuplicateIsbn { .. } => FailureKind::DuplicateIsbn,
            CatalogError::Io(_) => FailureKind::Io,
            CatalogError::Serialization(_) | CatalogError::Unexpected(_) => FailureKind::Unexpected,
        }
    }

    pub(crate) fn malformed(message: impl Into<String>) -> Self {
        CatalogError::MalformedEntry(message.into())
    }
}

/// Category of a failure, as written to the error log and reported to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FailureKind {
    InsufficientInput,
    InvalidFileName,
    MalformedEntry,
    #[serde(rename = "InvalidISBN")]
    InvalidIsbn,
    #[serde(rename = "DuplicateISBN")]
    DuplicateIsbn,
    #[serde(rename = "IoError")]
    Io,
    #[serde(rename = "UnexpectedError")]
    Unexpected,
}

impl FailureKind {
    pub fn name(&self) -> &'static str {
        match self {
            FailureKind::InsufficientInput => "InsufficientInput",
            FailureKind::InvalidFileName => "InvalidFileName",
            FailureKind::MalformedEntry => "MalformedEntry",
            FailureKind::InvalidIsbn => "InvalidISBN",
            FailureKind::DuplicateIsbn => "DuplicateISBN",
            FailureKind::Io => "IoError",
            FailureKind::Unexpected => "UnexpectedError",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
