//! Workspace config file source: <workspace>/fwscaffold.toml

use crate::config::WORKSPACE_CONFIG_FILE;
use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, File};
use std::path::Path;

pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    workspace_root: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let path = workspace_root.join(WORKSPACE_CONFIG_FILE);
    tracing::debug!("Workspace config file: {}", path.display());
    Ok(builder.add_source(File::from(path.as_path()).required(false)))
}
