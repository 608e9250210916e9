//! Configuration
//!
//! Layered configuration for the scaffolder: built-in defaults, the global
//! `config.toml`, the workspace `fwscaffold.toml`, then `FWSCAFFOLD_*`
//! environment variables.

mod facade;
pub mod merge;
pub mod paths;
pub mod sources;

pub use facade::ConfigLoader;
pub use paths::xdg_root as xdg;

use crate::error::ScaffoldError;
use crate::logging::LoggingConfig;
use crate::scaffold::manifest::{default_parts, Part, DEFAULT_CHIP_FAMILY};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Workspace file name looked up in the workspace root.
pub const WORKSPACE_CONFIG_FILE: &str = "fwscaffold.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScaffoldConfig {
    #[serde(default)]
    pub layout: LayoutConfig,

    #[serde(default)]
    pub manifest: ManifestConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the firmware tree and catalog live.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Firmware root, relative to the workspace
    #[serde(default = "default_firmware_dir")]
    pub firmware_dir: PathBuf,

    /// Catalog file name inside the firmware root
    #[serde(default = "default_catalog_file")]
    pub catalog_file: PathBuf,

    /// Prefix for image and manifest paths written into the catalog
    #[serde(default = "default_catalog_prefix")]
    pub catalog_prefix: String,
}

pub(crate) fn default_firmware_dir() -> PathBuf {
    PathBuf::from("firmware")
}

pub(crate) fn default_catalog_file() -> PathBuf {
    PathBuf::from("config.json")
}

pub(crate) fn default_catalog_prefix() -> String {
    "firmware".to_string()
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            firmware_dir: default_firmware_dir(),
            catalog_file: default_catalog_file(),
            catalog_prefix: default_catalog_prefix(),
        }
    }
}

impl LayoutConfig {
    pub fn firmware_root(&self, workspace_root: &Path) -> PathBuf {
        workspace_root.join(&self.firmware_dir)
    }

    pub fn catalog_path(&self, workspace_root: &Path) -> PathBuf {
        self.firmware_root(workspace_root).join(&self.catalog_file)
    }
}

/// Content of the manifest written for new versions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestConfig {
    #[serde(default = "default_chip_family")]
    pub chip_family: String,

    #[serde(default = "default_true")]
    pub new_install_prompt_erase: bool,

    #[serde(default = "default_parts")]
    pub parts: Vec<Part>,
}

pub(crate) fn default_chip_family() -> String {
    DEFAULT_CHIP_FAMILY.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            chip_family: default_chip_family(),
            new_install_prompt_erase: default_true(),
            parts: default_parts(),
        }
    }
}

impl ScaffoldConfig {
    pub fn validate(&self) -> Result<(), ScaffoldError> {
        if self.layout.firmware_dir.as_os_str().is_empty() {
            return Err(ScaffoldError::ConfigError(
                "layout.firmware_dir cannot be empty".to_string(),
            ));
        }
        if self.layout.catalog_file.as_os_str().is_empty() {
            return Err(ScaffoldError::ConfigError(
                "layout.catalog_file cannot be empty".to_string(),
            ));
        }
        if self.manifest.chip_family.trim().is_empty() {
            return Err(ScaffoldError::ConfigError(
                "manifest.chip_family cannot be empty".to_string(),
            ));
        }
        if self.manifest.parts.is_empty() {
            return Err(ScaffoldError::ConfigError(
                "manifest.parts must list at least one binary".to_string(),
            ));
        }
        if let Some(bad) = self.manifest.parts.iter().find(|p| !p.is_plain_file_name()) {
            return Err(ScaffoldError::ConfigError(format!(
                "manifest part path {:?} must be a plain file name",
                bad.path
            )));
        }
        Ok(())
    }
}
