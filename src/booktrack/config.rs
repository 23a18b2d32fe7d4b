use crate::errlog::DEFAULT_LOG_NAME;
use crate::error::{CatalogError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const CONFIG_FILENAME: &str = "booktrack.json";
const DEFAULT_CATALOG_EXT: &str = ".txt";

/// Configuration for booktrack, read from `booktrack.json` next to the catalog.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct TrackerConfig {
    /// Extensions accepted for the catalog file (e.g. ".txt")
    #[serde(default = "default_catalog_extensions")]
    pub catalog_extensions: Vec<String>,

    /// File name of the error log, created beside the catalog
    #[serde(default = "default_error_log_name")]
    pub error_log_name: String,
}

fn default_catalog_extensions() -> Vec<String> {
    vec![DEFAULT_CATALOG_EXT.to_string()]
}

fn default_error_log_name() -> String {
    DEFAULT_LOG_NAME.to_string()
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            catalog_extensions: default_catalog_extensions(),
            error_log_name: default_error_log_name(),
        }
    }
}

impl TrackerConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(CatalogError::Io)?;
        let mut config: TrackerConfig =
            serde_json::from_str(&content).map_err(CatalogError::Serialization)?;
        config.catalog_extensions = config
            .catalog_extensions
            .iter()
            .map(|ext| normalize_ext(ext))
            .collect();
        Ok(config)
    }

    /// Checks that `path` ends in one of the accepted catalog extensions.
    pub fn check_catalog_name(&self, path: &str) -> Result<()> {
        if self
            .catalog_extensions
            .iter()
            .any(|ext| path.ends_with(ext.as_str()))
        {
            return Ok(());
        }
        Err(CatalogError::InvalidFileName(format!(
            "Catalog file must end with {}, got: {}",
            self.catalog_extensions.join(" or "),
            path
        )))
    }
}

fn normalize_ext(ext: &str) -> String {
    if ext.starts_with('.') {
        ext.to_string()
    } else {
        format!(".{}", ext)
    }
}
