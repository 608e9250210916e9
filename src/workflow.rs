//! Scaffold workflow
//!
//! Ties the pieces together for one run: normalize names, build the folder
//! scaffold, merge the catalog entry and persist it. Nothing here prints;
//! the caller gets a `CreateReport` and decides how to show it.

use crate::catalog::{upsert, CatalogEntry, CatalogStorage, UpsertOutcome};
use crate::config::ScaffoldConfig;
use crate::error::ScaffoldError;
use crate::scaffold::{Manifest, ScaffoldBuilder, ScaffoldLayout, ScaffoldReport, ScaffoldRequest};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Result of a successful create run.
#[derive(Debug, Clone, Serialize)]
pub struct CreateReport {
    pub request: ScaffoldRequest,
    pub scaffold: ScaffoldReport,
    pub outcome: UpsertOutcome,
    pub warnings: Vec<String>,
    pub catalog_path: PathBuf,
}

/// Runs create requests against one workspace.
pub struct ScaffoldWorkflow<'a, S: CatalogStorage> {
    config: &'a ScaffoldConfig,
    workspace_root: &'a Path,
    storage: S,
}

impl<'a, S: CatalogStorage> ScaffoldWorkflow<'a, S> {
    pub fn new(config: &'a ScaffoldConfig, workspace_root: &'a Path, storage: S) -> Self {
        Self {
            config,
            workspace_root,
            storage,
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn layout_for(&self, request: &ScaffoldRequest) -> ScaffoldLayout {
        ScaffoldLayout::new(
            &self.config.layout.firmware_root(self.workspace_root),
            &self.config.layout.catalog_prefix,
            &request.device_id,
            &request.version_id,
        )
    }

    pub fn manifest_for(&self, request: &ScaffoldRequest) -> Manifest {
        let m = &self.config.manifest;
        Manifest::new(
            &request.version_name,
            &m.chip_family,
            m.new_install_prompt_erase,
            m.parts.clone(),
        )
    }

    /// Scaffold files and merge the catalog entry.
    ///
    /// The catalog is loaded before touching the filesystem so a malformed
    /// catalog aborts the run with nothing created.
    pub fn create(&self, request: &ScaffoldRequest) -> Result<CreateReport, ScaffoldError> {
        tracing::info!(
            device = %request.device_id,
            firmware = %request.firmware_id,
            version = %request.version_id,
            "Creating scaffold"
        );

        let catalog = self.storage.load()?;

        let layout = self.layout_for(request);
        let entry = CatalogEntry {
            device_id: request.device_id.to_string(),
            device_name: request.device_name.clone(),
            image_path: layout.catalog_image_path(),
            firmware_id: request.firmware_id.to_string(),
            firmware_name: request.firmware_name.clone(),
            version_id: request.version_id.to_string(),
            version_name: request.version_name.clone(),
            manifest_path: layout.catalog_manifest_path(),
        };

        let builder = ScaffoldBuilder::new(layout, &request.device_name, self.manifest_for(request));
        let scaffold = builder.build_all()?;

        let (catalog, outcome) = upsert(catalog, &entry);
        let warnings = outcome.warnings();
        for warning in &warnings {
            tracing::warn!("{}", warning);
        }
        tracing::info!("{}", outcome.summary());

        self.storage.save(&catalog)?;

        Ok(CreateReport {
            request: request.clone(),
            scaffold,
            outcome,
            warnings,
            catalog_path: self.storage.path().to_path_buf(),
        })
    }
}
