//! # Booktrack Architecture
//!
//! Booktrack keeps a library catalog in a flat text file, one book per line:
//!
//! ```text
//! The Hobbit:J.R.R. Tolkien:9780000000001:3
//! ```
//!
//! Each invocation loads the whole catalog and runs exactly one operation:
//! a title search, an ISBN lookup, or adding a new record. Lines and records
//! that fail validation are written to an append-only error log and the run
//! carries on.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Argument checks, catalog file creation, table output     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Load phase, then one classified operation                │
//! │  - Returns a RunReport with outcome, messages and counters  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - load / search / add, logging expected failures           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (codec, validate, query, model) and Storage (store/)  │
//! │  - Pure parsing, validation and queries                     │
//! │  - CatalogStore trait: FileStore, InMemoryStore             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! From `api.rs` inward nothing writes to stdout or exits the process.
//! Expected failures are values: `Result` from parsing and lookups, and
//! [`commands::Outcome::Failed`] in the final report.
//!
//! ## Module Overview
//!
//! - [`api`]: `TrackerApi`, the entry point for a run
//! - [`commands`]: load, search and add steps, plus the run `Summary`
//! - [`codec`]: line parsing and serialization
//! - [`validate`]: field rules (ISBN, non-empty text, positive copies)
//! - [`query`]: title and ISBN search
//! - [`model`]: `Book` and `Catalog`
//! - [`store`]: storage abstraction and implementations
//! - [`errlog`]: the error log file
//! - [`operation`]: classification of the operation argument
//! - [`config`]: `booktrack.json` settings
//! - [`error`]: error types

pub mod api;
pub mod codec;
pub mod commands;
pub mod config;
pub mod errlog;
pub mod error;
pub mod model;
pub mod operation;
pub mod query;
pub mod store;
pub mod validate;
