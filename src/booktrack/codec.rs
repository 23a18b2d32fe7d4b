//! # Record Codec
//!
//! Converts between catalog lines and [`Book`] values. The line format is
//!
//! ```text
//! Title:Author:ISBN:Copies
//! ```
//!
//! Lines are split into at most four parts, so any colon after the third
//! separator ends up in the copies field and makes it fail to parse.
//!
//! Serialization does not escape colons. A title containing `:` is written
//! as-is and will not read back as the same record.

use crate::error::{CatalogError, Result};
use crate::model::Book;
use std::fmt;
use std::str::FromStr;

pub const FIELD_SEPARATOR: char = ':';
pub const FIELD_COUNT: usize = 4;

pub fn parse_line(line: &str) -> Result<Book> {
    let parts: Vec<&str> = line.splitn(FIELD_COUNT, FIELD_SEPARATOR).collect();
    if parts.len() < FIELD_COUNT {
        return Err(CatalogError::malformed(format!(
            "Expected 4 fields (Title:Author:ISBN:Copies), found: {}",
            parts.len()
        )));
    }

    Book::from_fields(parts[0], parts[1], parts[2], || parse_copies(parts[3]))
}

fn parse_copies(raw: &str) -> Result<i32> {
    let raw = raw.trim();
    raw.parse().map_err(|_| {
        CatalogError::malformed(format!("Copies field is not a valid integer: \"{}\"", raw))
    })
}

pub fn to_line(book: &Book) -> String {
    book.to_string()
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{sep}{}{sep}{}{sep}{}",
            self.title(),
            self.author(),
            self.isbn(),
            self.copies(),
            sep = FIELD_SEPARATOR
        )
    }
}

impl FromStr for Book {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        parse_line(s)
    }
}
