use super::CatalogStore;
use crate::error::{CatalogError, Result};

/// Keeps the backing "file" in memory.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    contents: String,
    writes: usize,
    unreadable: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            contents: contents.into(),
            ..Self::default()
        }
    }

    /// A store whose reads fail, standing in for a catalog file that cannot be opened.
    pub fn unreadable() -> Self {
        Self {
            unreadable: true,
            ..Self::default()
        }
    }

    pub fn contents(&self) -> &str {
        &self.contents
    }

    /// Number of times the catalog has been rewritten.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl CatalogStore for InMemoryStore {
    fn read_raw(&self) -> Result<Vec<u8>> {
        if self.unreadable {
            return Err(CatalogError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "catalog not readable",
            )));
        }
        Ok(self.contents.clone().into_bytes())
    }

    fn write_raw(&mut self, contents: &str) -> Result<()> {
        self.contents = contents.to_string();
        self.writes += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub const DUNE: &str = "Dune:Frank Herbert:9780441013593:2";
    pub const EMMA: &str = "Emma:Jane Austen:9780141439587:1";
    pub const HOBBIT: &str = "The Hobbit:J.R.R. Tolkien:9780000000001:3";

    pub struct StoreFixture {
        lines: Vec<String>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self { lines: Vec::new() }
        }

        pub fn with_line(mut self, line: &str) -> Self {
            self.lines.push(line.to_string());
            self
        }

        pub fn with_books(self) -> Self {
            self.with_line(DUNE).with_line(EMMA).with_line(HOBBIT)
        }

        pub fn with_duplicate_isbn(self, isbn: &str) -> Self {
            self.with_line(&format!("First Copy:Someone:{}:1", isbn))
                .with_line(&format!("Second Copy:Someone Else:{}:1", isbn))
        }

        pub fn build(self) -> InMemoryStore {
            let mut contents = self.lines.join("\n");
            if !contents.is_empty() {
                contents.push('\n');
            }
            InMemoryStore::with_contents(contents)
        }
    }
}
