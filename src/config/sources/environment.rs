//! Environment variable source: FWSCAFFOLD_* prefix with __ separator

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::Environment;

/// Add environment variable overlay to builder.
/// Uses FWSCAFFOLD_ prefix and __ as separator for nested keys, so
/// `FWSCAFFOLD_MANIFEST__CHIP_FAMILY` sets `manifest.chip_family`.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let builder = builder.add_source(
        Environment::with_prefix("FWSCAFFOLD")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );
    Ok(builder)
}
