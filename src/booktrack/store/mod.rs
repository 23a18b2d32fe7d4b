//! # Storage Layer
//!
//! The catalog lives in a single backing text file. The [`CatalogStore`]
//! trait hides where that text comes from so the command layer can be tested
//! without touching the filesystem.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production store backed by a `.txt` file. Writes go
//!   to a temporary sibling and are renamed over the target.
//! - [`memory::InMemoryStore`]: keeps the file contents in a `String`.
//!
//! ## Load Semantics
//!
//! Loading never stops at a bad line. The file is read as bytes and decoded
//! one line at a time, so a line that is not valid UTF-8 is rejected on its
//! own. Blank lines are skipped, every other line is trimmed and parsed, good
//! records are kept in file order and bad ones are returned as [`Rejected`]
//! for the caller to log. Only a failure to read the backing file itself is
//! an error.
//!
//! Persisting always rewrites the whole file, one record per line.

use crate::codec;
use crate::error::{CatalogError, Result};
use crate::model::Catalog;

pub mod fs;
pub mod memory;

/// A non-blank line that did not parse, and why.
#[derive(Debug)]
pub struct Rejected {
    pub raw: String,
    pub error: CatalogError,
}

#[derive(Debug, Default)]
pub struct LoadOutcome {
    pub catalog: Catalog,
    pub rejected: Vec<Rejected>,
}

pub trait CatalogStore {
    /// Raw bytes of the backing file.
    fn read_raw(&self) -> Result<Vec<u8>>;

    /// Replace the backing file with `contents`.
    fn write_raw(&mut self, contents: &str) -> Result<()>;

    fn load(&self) -> Result<LoadOutcome> {
        let raw = self.read_raw()?;
        Ok(parse_catalog(&raw))
    }

    fn persist(&mut self, catalog: &Catalog) -> Result<()> {
        self.write_raw(&render_catalog(catalog))
    }
}

pub fn parse_catalog(raw: &[u8]) -> LoadOutcome {
    let mut books = Vec::new();
    let mut rejected = Vec::new();

    for bytes in raw.split(|&b| b == b'\n') {
        let line = match std::str::from_utf8(bytes) {
            Ok(line) => line.trim(),
            Err(e) => {
                rejected.push(Rejected {
                    raw: String::from_utf8_lossy(bytes).trim().to_string(),
                    error: CatalogError::malformed(format!(
                        "Line is not valid UTF-8 (invalid byte at offset {})",
                        e.valid_up_to()
                    )),
                });
                continue;
            }
        };
        if line.is_empty() {
            continue;
        }
        match codec::parse_line(line) {
            Ok(book) => books.push(book),
            Err(error) => rejected.push(Rejected {
                raw: line.to_string(),
                error,
            }),
        }
    }

    tracing::debug!(
        loaded = books.len(),
        rejected = rejected.len(),
        "parsed catalog"
    );

    LoadOutcome {
        catalog: Catalog::from_books(books),
        rejected,
    }
}

pub fn render_catalog(catalog: &Catalog) -> String {
    let mut out = String::new();
    for book in catalog {
        out.push_str(&codec::to_line(book));
        out.push('\n');
    }
    out
}
