use crate::error::{CatalogError, Result};
use crate::model::{Book, Catalog};

/// Books whose title contains `keyword`, ignoring case, in catalog order.
pub fn search_by_title<'a>(catalog: &'a Catalog, keyword: &str) -> Vec<&'a Book> {
    let needle = keyword.to_lowercase();
    catalog
        .iter()
        .filter(|book| book.title().to_lowercase().contains(&needle))
        .collect()
}

/// Looks up a single book by exact ISBN.
///
/// More than one match is an error: the catalog does not enforce uniqueness
/// on write, so duplicates only surface here.
pub fn search_by_isbn<'a>(catalog: &'a Catalog, isbn: &str) -> Result<Option<&'a Book>> {
    let matches: Vec<&Book> = catalog.iter().filter(|book| book.isbn() == isbn).collect();
    match matches.as_slice() {
        [] => Ok(None),
        [book] => Ok(Some(*book)),
        _ => Err(CatalogError::DuplicateIsbn {
            isbn: isbn.to_string(),
            count: matches.len(),
        }),
    }
}
