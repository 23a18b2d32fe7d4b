use super::{log_failure, CmdMessage, CmdResult, Outcome, Summary};
use crate::codec;
use crate::errlog::ErrorSink;
use crate::error::Result;
use crate::model::Catalog;
use crate::store::CatalogStore;

/// Parses `record`, adds it to the catalog in title order and rewrites the
/// backing file.
///
/// A record that fails to parse is logged with its raw text and leaves the
/// catalog untouched. Failing to write the catalog is returned as an error.
pub fn run<S: CatalogStore, L: ErrorSink>(
    store: &mut S,
    sink: &L,
    catalog: &mut Catalog,
    record: &str,
    summary: &mut Summary,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let book = match codec::parse_line(record) {
        Ok(book) => book,
        Err(error) => {
            tracing::warn!(record, "rejected new record: {}", error);
            if let Some(warning) = log_failure(sink, record, &error, summary) {
                result.add_message(warning);
            }
            result.add_message(CmdMessage::error(format!("Error adding book: {}", error)));
            return Ok(result.with_outcome(Outcome::failed(&error)));
        }
    };

    catalog.add(book.clone());
    store.persist(catalog)?;
    summary.books_added += 1;

    result.add_message(CmdMessage::success("Book added successfully to the catalog."));
    Ok(result.with_outcome(Outcome::Added { book }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errlog::MemoryErrorLog;
    use crate::error::FailureKind;
    use crate::model::Book;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn adds_in_sorted_position_and_persists() {
        let mut store = StoreFixture::new()
            .with_line("Alpha:First Author:1000000000001:1")
            .with_line("Zeta:Last Author:1000000000002:1")
            .build();
        let mut catalog = store.load().unwrap().catalog;
        let sink = MemoryErrorLog::new();
        let mut summary = Summary::default();

        let result = run(
            &mut store,
            &sink,
            &mut catalog,
            "New Book:Some Author:1111111111111:1",
            &mut summary,
        )
        .unwrap();

        assert!(matches!(result.outcome, Outcome::Added { .. }));
        assert_eq!(summary.books_added, 1);
        assert_eq!(
            store.contents(),
            "Alpha:First Author:1000000000001:1\n\
             New Book:Some Author:1111111111111:1\n\
             Zeta:Last Author:1000000000002:1\n"
        );
        let titles: Vec<_> = catalog.iter().map(Book::title).collect();
        assert_eq!(titles, vec!["Alpha", "New Book", "Zeta"]);
    }

    #[test]
    fn add_sorts_unsorted_file_contents() {
        let mut store = StoreFixture::new()
            .with_line("zebra:A:1000000000001:1")
            .with_line("Mango:B:1000000000002:1")
            .build();
        let mut catalog = store.load().unwrap().catalog;
        let sink = MemoryErrorLog::new();
        let mut summary = Summary::default();

        run(&mut store, &sink, &mut catalog, "apple:C:1000000000003:2", &mut summary).unwrap();

        let titles: Vec<_> = catalog.iter().map(Book::title).collect();
        assert_eq!(titles, vec!["apple", "Mango", "zebra"]);
    }

    #[test]
    fn add_allows_duplicate_isbn() {
        let mut store = StoreFixture::new().with_books().build();
        let mut catalog = store.load().unwrap().catalog;
        let sink = MemoryErrorLog::new();
        let mut summary = Summary::default();

        run(&mut store, &sink, &mut catalog, "Dune Again:F:9780441013593:1", &mut summary).unwrap();

        assert_eq!(catalog.len(), 4);
        assert_eq!(summary.errors, 0);
    }

    #[test]
    fn invalid_record_is_logged_and_not_persisted() {
        let mut store = InMemoryStore::new();
        let mut catalog = Catalog::new();
        let sink = MemoryErrorLog::new();
        let mut summary = Summary::default();

        let result = run(&mut store, &sink, &mut catalog, "Bad:Author:12:2", &mut summary).unwrap();

        assert!(matches!(
            result.outcome,
            Outcome::Failed { kind: FailureKind::InvalidIsbn, .. }
        ));
        assert!(catalog.is_empty());
        assert_eq!(store.writes(), 0);
        assert_eq!(summary.books_added, 0);
        assert_eq!(summary.errors, 1);
        assert_eq!(sink.entries()[0].input, "Bad:Author:12:2");
    }

    #[test]
    fn empty_fields_fail_as_malformed() {
        let mut store = InMemoryStore::new();
        let mut catalog = Catalog::new();
        let sink = MemoryErrorLog::new();
        let mut summary = Summary::default();

        let result = run(&mut store, &sink, &mut catalog, ":::", &mut summary).unwrap();

        assert!(matches!(
            result.outcome,
            Outcome::Failed { kind: FailureKind::MalformedEntry, .. }
        ));
    }
}
