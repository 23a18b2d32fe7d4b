use super::{log_failure, CmdMessage, Summary};
use crate::errlog::ErrorSink;
use crate::error::Result;
use crate::model::Catalog;
use crate::store::CatalogStore;

#[derive(Debug, Default)]
pub struct Loaded {
    pub catalog: Catalog,
    pub messages: Vec<CmdMessage>,
}

/// Loads the whole catalog. Rejected lines are logged and counted but never
/// stop the load.
pub fn run<S: CatalogStore, L: ErrorSink>(
    store: &S,
    sink: &L,
    summary: &mut Summary,
) -> Result<Loaded> {
    let outcome = store.load()?;
    let mut messages = Vec::new();

    for rejected in &outcome.rejected {
        tracing::warn!(line = %rejected.raw, "rejected catalog line: {}", rejected.error);
        if let Some(warning) = log_failure(sink, &rejected.raw, &rejected.error, summary) {
            messages.push(warning);
        }
    }

    summary.records_processed += outcome.catalog.len();

    if !outcome.rejected.is_empty() {
        messages.push(CmdMessage::warning(format!(
            "Skipped {} invalid catalog line(s)",
            outcome.rejected.len()
        )));
    }

    Ok(Loaded {
        catalog: outcome.catalog,
        messages,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errlog::MemoryErrorLog;
    use crate::error::FailureKind;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn counts_valid_records_and_logs_invalid_ones() {
        let store = StoreFixture::new()
            .with_books()
            .with_line("Bad:Author:12:2")
            .with_line("")
            .with_line("::9780000000001:1")
            .build();
        let sink = MemoryErrorLog::new();
        let mut summary = Summary::default();

        let loaded = run(&store, &sink, &mut summary).unwrap();

        assert_eq!(loaded.catalog.len(), 3);
        assert_eq!(summary.records_processed, 3);
        assert_eq!(summary.errors, 2);

        let entries = sink.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].input, "Bad:Author:12:2");
        assert_eq!(entries[0].kind, FailureKind::InvalidIsbn);
        assert_eq!(entries[1].kind, FailureKind::MalformedEntry);
    }

    #[test]
    fn clean_catalog_produces_no_messages() {
        let store = StoreFixture::new().with_books().build();
        let sink = MemoryErrorLog::new();
        let mut summary = Summary::default();

        let loaded = run(&store, &sink, &mut summary).unwrap();

        assert!(loaded.messages.is_empty());
        assert!(sink.is_empty());
        assert_eq!(summary.errors, 0);
    }

    #[test]
    fn log_write_failures_become_warnings() {
        let store = StoreFixture::new().with_line("broken").build();
        let sink = MemoryErrorLog::failing();
        let mut summary = Summary::default();

        let loaded = run(&store, &sink, &mut summary).unwrap();

        assert_eq!(summary.errors, 1);
        assert!(loaded
            .messages
            .iter()
            .any(|m| m.content.starts_with("Warning: Could not write to error log")));
    }

    #[test]
    fn unreadable_catalog_is_an_error() {
        let store = InMemoryStore::unreadable();
        let sink = MemoryErrorLog::new();
        let mut summary = Summary::default();

        assert!(run(&store, &sink, &mut summary).is_err());
        assert_eq!(summary.records_processed, 0);
    }
}
