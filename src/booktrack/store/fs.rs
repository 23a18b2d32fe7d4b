use super::CatalogStore;
use crate::error::{CatalogError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates an empty catalog file, and its parent directories, if missing.
    /// Returns true when the file was created.
    pub fn ensure_exists(&self) -> Result<bool> {
        if self.path.exists() {
            return Ok(false);
        }
        if let Some(parent) = self.parent_dir() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(CatalogError::Io)?;
            }
        }
        fs::File::create(&self.path).map_err(CatalogError::Io)?;
        tracing::debug!(path = %self.path.display(), "created catalog file");
        Ok(true)
    }

    fn parent_dir(&self) -> Option<&Path> {
        self.path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
    }

    /// The file a write should replace: the symlink target when the catalog
    /// path is a link, so the link itself survives the rename.
    fn write_target(&self) -> PathBuf {
        fs::canonicalize(&self.path).unwrap_or_else(|_| self.path.clone())
    }
}

fn tmp_path_beside(target: &Path) -> PathBuf {
    let name = format!(".catalog-{}.tmp", Uuid::new_v4());
    match target.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) => parent.join(name),
        None => PathBuf::from(name),
    }
}

impl CatalogStore for FileStore {
    fn read_raw(&self) -> Result<Vec<u8>> {
        fs::read(&self.path).map_err(CatalogError::Io)
    }

    fn write_raw(&mut self, contents: &str) -> Result<()> {
        // Atomic write; the replacement keeps the old file's permissions
        let target = self.write_target();
        let tmp_path = tmp_path_beside(&target);
        let written = fs::write(&tmp_path, contents).and_then(|()| match fs::metadata(&target) {
            Ok(meta) => fs::set_permissions(&tmp_path, meta.permissions()),
            Err(_) => Ok(()),
        });
        if let Err(e) = written {
            let _ = fs::remove_file(&tmp_path);
            return Err(CatalogError::Io(e));
        }
        if let Err(e) = fs::rename(&tmp_path, &target) {
            let _ = fs::remove_file(&tmp_path);
            return Err(CatalogError::Io(e));
        }
        tracing::debug!(path = %self.path.display(), bytes = contents.len(), "persisted catalog");
        Ok(())
    }
}
