//! XDG Base Directory utilities.

use crate::error::ScaffoldError;
use std::path::PathBuf;

/// Get XDG config home directory
///
/// Returns `$XDG_CONFIG_HOME` if set, otherwise defaults to `$HOME/.config`
/// Follows XDG Base Directory Specification
pub fn config_home() -> Result<PathBuf, ScaffoldError> {
    if let Ok(xdg_config_home) = std::env::var("XDG_CONFIG_HOME") {
        if !xdg_config_home.is_empty() {
            return Ok(PathBuf::from(xdg_config_home));
        }
    }

    let home = std::env::var("HOME").map_err(|_| {
        ScaffoldError::ConfigError(
            "Could not determine XDG config home directory (HOME not set)".to_string(),
        )
    })?;

    Ok(PathBuf::from(home).join(".config"))
}

/// Global config file path: `$XDG_CONFIG_HOME/fwscaffold/config.toml`
pub fn global_config_path() -> Result<PathBuf, ScaffoldError> {
    Ok(config_home()?.join("fwscaffold").join("config.toml"))
}
