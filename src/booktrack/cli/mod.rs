//! # CLI Layer
//!
//! One possible client of the booktrack library. This is the only place that
//! knows about argument parsing, the terminal, and process exit codes.
//!
//! ## Responsibilities
//!
//! 1. **Argument checks**: both the catalog path and the operation are
//!    required, and the catalog must have an accepted extension
//! 2. **Context setup**: config, catalog file creation, `TrackerApi` with a
//!    `FileStore` and a `FileErrorLog`
//! 3. **Output**: the result table and the statistics block, or JSON
//!
//! Every run that gets past argument parsing prints the statistics block,
//! including runs rejected before any catalog work starts.

mod args;
mod render;

use args::Cli;
use booktrack::api::{CmdMessage, RunReport, TrackerApi};
use booktrack::config::TrackerConfig;
use booktrack::errlog::FileErrorLog;
use booktrack::error::{CatalogError, Result};
use booktrack::store::fs::FileStore;
use clap::Parser;
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, EnvFilter};

const LOG_ENV: &str = "BOOKTRACK_LOG";

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let report = match panic::catch_unwind(AssertUnwindSafe(|| execute(&cli))) {
        Ok(report) => report,
        Err(payload) => {
            let message = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown failure".to_string());
            RunReport::rejected(&CatalogError::Unexpected(message))
        }
    };

    if cli.json {
        render::print_json(&report)
    } else {
        render::print_report(&report);
        println!("\nThank you for using booktrack.");
        Ok(())
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "booktrack=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn execute(cli: &Cli) -> RunReport {
    let (catalog, operation) = match (cli.catalog.as_deref(), cli.operation.as_deref()) {
        (Some(catalog), Some(operation)) => (catalog, operation),
        _ => {
            return RunReport::rejected(&CatalogError::InsufficientInput(
                "At least 2 arguments required: <catalogFile.txt> <operation>".to_string(),
            ))
        }
    };

    let mut notes = Vec::new();
    let config = match TrackerConfig::load(catalog_dir(Path::new(catalog))) {
        Ok(config) => config,
        Err(e) => {
            notes.push(CmdMessage::warning(format!(
                "Warning: Ignoring invalid config: {}",
                e
            )));
            TrackerConfig::default()
        }
    };

    if let Err(e) = config.check_catalog_name(catalog) {
        return with_notes(RunReport::rejected(&e), notes);
    }

    let store = FileStore::new(catalog);
    match store.ensure_exists() {
        Ok(true) => notes.push(CmdMessage::info(format!(
            "Info: Created new catalog file: {}",
            catalog
        ))),
        Ok(false) => {}
        Err(e) => return with_notes(RunReport::rejected(&e), notes),
    }

    let log = FileErrorLog::beside(store.path(), &config.error_log_name);
    tracing::debug!(catalog, log = %log.path().display(), "starting run");

    let mut api = TrackerApi::new(store, log);
    with_notes(api.run(operation), notes)
}

fn catalog_dir(catalog: &Path) -> PathBuf {
    match catalog.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

fn with_notes(mut report: RunReport, mut notes: Vec<CmdMessage>) -> RunReport {
    notes.append(&mut report.messages);
    report.messages = notes;
    report
}
