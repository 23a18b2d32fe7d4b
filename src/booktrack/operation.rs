use crate::codec::{FIELD_COUNT, FIELD_SEPARATOR};
use crate::validate::is_isbn;
use serde::Serialize;

/// What a single invocation was asked to do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "input", rename_all = "snake_case")]
pub enum Operation {
    IsbnSearch(String),
    Add(String),
    TitleSearch(String),
}

impl Operation {
    /// Classifies the raw operation string. Checked in order: a bare 13-digit
    /// ISBN, then a record with exactly four fields (empty ones included),
    /// then anything else as a title keyword.
    pub fn classify(input: &str) -> Self {
        if is_isbn(input) {
            Operation::IsbnSearch(input.to_string())
        } else if input.split(FIELD_SEPARATOR).count() == FIELD_COUNT {
            Operation::Add(input.to_string())
        } else {
            Operation::TitleSearch(input.to_string())
        }
    }
}
