//! # API Facade
//!
//! [`TrackerApi`] is the single entry point for a run. It owns the catalog
//! store and the error sink, runs the load phase to completion, and only
//! then executes the one requested operation.
//!
//! A run never aborts half way: every failure ends up in the returned
//! [`RunReport`] as an outcome, messages and counters, so the caller can
//! always print a summary.
//!
//! `TrackerApi<S, L>` is generic over both collaborators:
//! - Production: `TrackerApi<FileStore, FileErrorLog>`
//! - Testing: `TrackerApi<InMemoryStore, MemoryErrorLog>`

use crate::commands;
use crate::errlog::ErrorSink;
use crate::error::{CatalogError, Result};
use crate::model::Catalog;
use crate::operation::Operation;
use crate::store::CatalogStore;
use serde::Serialize;

/// Everything a caller needs to render the result of one run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub operation: Option<Operation>,
    pub outcome: Outcome,
    pub messages: Vec<CmdMessage>,
    pub summary: Summary,
}

impl RunReport {
    /// A run that failed before any catalog work started.
    pub fn rejected(error: &CatalogError) -> Self {
        Self {
            operation: None,
            outcome: Outcome::failed(error),
            messages: vec![CmdMessage::error(format!("Error: {}", error))],
            summary: Summary {
                errors: 1,
                ..Summary::default()
            },
        }
    }
}

pub struct TrackerApi<S: CatalogStore, L: ErrorSink> {
    store: S,
    log: L,
}

impl<S: CatalogStore, L: ErrorSink> TrackerApi<S, L> {
    pub fn new(store: S, log: L) -> Self {
        Self { store, log }
    }

    /// Loads the catalog, then runs `operation` against it.
    ///
    /// When the catalog cannot be read the operation is skipped, so an add
    /// never overwrites a file whose contents were not loaded.
    pub fn run(&mut self, operation: &str) -> RunReport {
        let operation = Operation::classify(operation);
        let mut summary = Summary::default();
        let mut messages = Vec::new();

        let loaded = match commands::load::run(&self.store, &self.log, &mut summary) {
            Ok(loaded) => loaded,
            Err(error) => {
                tracing::error!("failed to load catalog: {}", error);
                summary.errors += 1;
                messages.push(CmdMessage::error(format!("Error: {}", error)));
                return RunReport {
                    operation: Some(operation),
                    outcome: Outcome::failed(&error),
                    messages,
                    summary,
                };
            }
        };
        messages.extend(loaded.messages);
        let mut catalog = loaded.catalog;

        let outcome = match self.execute(&mut catalog, &operation, &mut summary) {
            Ok(result) => {
                messages.extend(result.messages);
                result.outcome
            }
            Err(error) => {
                tracing::error!("operation failed: {}", error);
                summary.errors += 1;
                messages.push(CmdMessage::error(format!("Error: {}", error)));
                Outcome::failed(&error)
            }
        };

        RunReport {
            operation: Some(operation),
            outcome,
            messages,
            summary,
        }
    }

    /// Runs one operation against an already loaded catalog.
    pub fn execute(
        &mut self,
        catalog: &mut Catalog,
        operation: &Operation,
        summary: &mut Summary,
    ) -> Result<CmdResult> {
        tracing::debug!(?operation, books = catalog.len(), "executing operation");
        match operation {
            Operation::IsbnSearch(isbn) => {
                Ok(commands::search::by_isbn(catalog, isbn, &self.log, summary))
            }
            Operation::Add(record) => {
                commands::add::run(&mut self.store, &self.log, catalog, record, summary)
            }
            Operation::TitleSearch(keyword) => {
                Ok(commands::search::by_title(catalog, keyword, summary))
            }
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn log(&self) -> &L {
        &self.log
    }
}

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel, Outcome, Summary};
