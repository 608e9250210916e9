//! Scalar defaults seeded into every config builder.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError};

pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("layout.firmware_dir", "firmware")?
        .set_default("layout.catalog_file", "config.json")?
        .set_default("layout.catalog_prefix", "firmware")?
        .set_default("manifest.chip_family", crate::scaffold::DEFAULT_CHIP_FAMILY)?
        .set_default("manifest.new_install_prompt_erase", true)
}
