//! Catalog storage: load and persist the catalog document.

use super::model::Catalog;
use crate::error::ScaffoldError;
use std::io::Write;
use std::path::{Path, PathBuf};

pub trait CatalogStorage {
    /// Load the catalog; a missing document yields an empty catalog.
    fn load(&self) -> Result<Catalog, ScaffoldError>;
    fn save(&self, catalog: &Catalog) -> Result<(), ScaffoldError>;
    fn path(&self) -> &Path;
}

/// Catalog stored as a pretty-printed JSON file.
pub struct JsonCatalogStorage {
    path: PathBuf,
}

impl JsonCatalogStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogStorage for JsonCatalogStorage {
    fn load(&self) -> Result<Catalog, ScaffoldError> {
        if !self.path.exists() {
            tracing::debug!(
                "Catalog {} not found, starting from an empty catalog",
                self.path.display()
            );
            return Ok(Catalog::new());
        }

        let content = std::fs::read_to_string(&self.path)
            .map_err(|e| ScaffoldError::io("read catalog", &self.path, e))?;
        serde_json::from_str(&content).map_err(|e| ScaffoldError::CatalogParse {
            path: self.path.clone(),
            source: e,
        })
    }

    /// Write through a sibling temp file so a failed write leaves the old
    /// catalog intact.
    fn save(&self, catalog: &Catalog) -> Result<(), ScaffoldError> {
        let content = crate::scaffold::to_pretty_json(catalog, "catalog")?;

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        std::fs::create_dir_all(&dir).map_err(|e| ScaffoldError::CatalogWrite {
            path: self.path.clone(),
            reason: format!("cannot create {}: {}", dir.display(), e),
        })?;

        let write_err = |reason: String| ScaffoldError::CatalogWrite {
            path: self.path.clone(),
            reason,
        };
        let mut temp = tempfile::NamedTempFile::new_in(&dir).map_err(|e| write_err(e.to_string()))?;
        temp.write_all(content.as_bytes())
            .map_err(|e| write_err(e.to_string()))?;
        temp.as_file()
            .sync_all()
            .map_err(|e| write_err(e.to_string()))?;
        // Temp files are created owner-only; the catalog is served to browsers.
        let permissions = match std::fs::metadata(&self.path) {
            Ok(meta) => Some(meta.permissions()),
            Err(_) => default_permissions(),
        };
        if let Some(permissions) = permissions {
            std::fs::set_permissions(temp.path(), permissions)
                .map_err(|e| write_err(e.to_string()))?;
        }
        temp.persist(&self.path)
            .map_err(|e| write_err(e.error.to_string()))?;

        tracing::info!("Wrote catalog {}", self.path.display());
        Ok(())
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(unix)]
fn default_permissions() -> Option<std::fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(std::fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn default_permissions() -> Option<std::fs::Permissions> {
    None
}
