use crate::error::Result;
use crate::validate::{require_non_empty, validate_copies, validate_isbn};
use serde::Serialize;

/// A validated catalog record. Fields are private so a `Book` that exists
/// has always passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Book {
    title: String,
    author: String,
    isbn: String,
    copies: u32,
}

impl Book {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
        copies: i32,
    ) -> Result<Self> {
        Self::from_fields(&title.into(), &author.into(), &isbn.into(), || Ok(copies))
    }

    /// Trims and validates each field in record order. `copies` is only
    /// evaluated once title, author and ISBN have passed.
    pub(crate) fn from_fields(
        title: &str,
        author: &str,
        isbn: &str,
        copies: impl FnOnce() -> Result<i32>,
    ) -> Result<Self> {
        let title = title.trim();
        let author = author.trim();
        let isbn = isbn.trim();

        require_non_empty("Title", title)?;
        require_non_empty("Author", author)?;
        validate_isbn(isbn)?;
        let copies = validate_copies(copies()?)?;

        Ok(Self {
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
            copies,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn isbn(&self) -> &str {
        &self.isbn
    }

    pub fn copies(&self) -> u32 {
        self.copies
    }

    fn sort_key(&self) -> String {
        self.title.to_lowercase()
    }
}

/// The books of one run, in file order until the first `add`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_books(books: Vec<Book>) -> Self {
        Self { books }
    }

    /// Appends `book` and re-sorts by lowercase title. The sort is stable, so
    /// books with equal keys keep their relative order.
    pub fn add(&mut self, book: Book) {
        self.books.push(book);
        self.books.sort_by_key(Book::sort_key);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Book> {
        self.books.iter()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Book;
    type IntoIter = std::slice::Iter<'a, Book>;

    fn into_iter(self) -> Self::IntoIter {
        self.books.iter()
    }
}
