//! Global config file source: $XDG_CONFIG_HOME/fwscaffold/config.toml

use crate::config::xdg;
use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, File};

/// Add the global config file when a config home can be resolved.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let Ok(path) = xdg::global_config_path() else {
        tracing::debug!("No config home available, skipping global config file");
        return Ok(builder);
    };
    tracing::debug!("Global config file: {}", path.display());
    Ok(builder.add_source(File::from(path.as_path()).required(false)))
}
