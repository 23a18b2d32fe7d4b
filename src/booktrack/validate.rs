//! Field-level rules for book records.
//!
//! ISBNs are opaque identifiers here: exactly 13 ASCII digits, no checksum.

use crate::error::{CatalogError, Result};

pub const ISBN_LEN: usize = 13;

/// True when `text` is exactly 13 ASCII digits.
pub fn is_isbn(text: &str) -> bool {
    text.len() == ISBN_LEN && text.bytes().all(|b| b.is_ascii_digit())
}

pub fn validate_isbn(text: &str) -> Result<()> {
    if is_isbn(text) {
        Ok(())
    } else {
        Err(CatalogError::InvalidIsbn(text.to_string()))
    }
}

/// Rejects a title or author that is empty after trimming.
pub fn require_non_empty(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CatalogError::malformed(format!("{} field is empty", field)));
    }
    Ok(())
}

pub fn validate_copies(copies: i32) -> Result<u32> {
    if copies <= 0 {
        return Err(CatalogError::malformed(format!(
            "Copies must be a positive integer, got: {}",
            copies
        )));
    }
    Ok(copies.unsigned_abs())
}
