use super::{log_failure, CmdMessage, CmdResult, Outcome, Summary};
use crate::errlog::ErrorSink;
use crate::model::{Book, Catalog};
use crate::query;

pub fn by_title(catalog: &Catalog, keyword: &str, summary: &mut Summary) -> CmdResult {
    let books: Vec<Book> = query::search_by_title(catalog, keyword)
        .into_iter()
        .cloned()
        .collect();
    summary.search_results = books.len();

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!("Found {} result(s).", books.len())));
    result.with_outcome(Outcome::TitleMatches {
        keyword: keyword.to_string(),
        books,
    })
}

/// Exact ISBN lookup. A duplicate ISBN is logged against the searched value
/// and reported as a failed search.
pub fn by_isbn<L: ErrorSink>(
    catalog: &Catalog,
    isbn: &str,
    sink: &L,
    summary: &mut Summary,
) -> CmdResult {
    let mut result = CmdResult::default();

    match query::search_by_isbn(catalog, isbn) {
        Ok(book) => {
            summary.search_results = usize::from(book.is_some());
            if book.is_none() {
                result.add_message(CmdMessage::info(format!("No book found with ISBN: {}", isbn)));
            }
            result.with_outcome(Outcome::IsbnMatch {
                isbn: isbn.to_string(),
                book: book.cloned(),
            })
        }
        Err(error) => {
            tracing::warn!(isbn, "{}", error);
            if let Some(warning) = log_failure(sink, isbn, &error, summary) {
                result.add_message(warning);
            }
            result.add_message(CmdMessage::error(format!("Error: {}", error)));
            result.with_outcome(Outcome::failed(&error))
        }
    }
}
