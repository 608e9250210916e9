//! Flashing manifest written for each scaffolded version.

use serde::{Deserialize, Serialize};

pub const DEFAULT_CHIP_FAMILY: &str = "ESP32-S3";

/// One flashable binary and its flash offset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    pub path: String,
    pub offset: u64,
}

impl Part {
    pub fn new(path: &str, offset: u64) -> Self {
        Self {
            path: path.to_string(),
            offset,
        }
    }

    /// Part paths are plain file names inside the version folder.
    pub fn is_plain_file_name(&self) -> bool {
        let p = self.path.as_str();
        !p.is_empty() && p != "." && p != ".." && !p.contains(['/', '\\'])
    }
}

/// Default ESP32-S3 partition layout.
pub fn default_parts() -> Vec<Part> {
    vec![
        Part::new("bootloader.bin", 0),
        Part::new("partition-table.bin", 32768),
        Part::new("ota_data_initial.bin", 53248),
        Part::new("srmodels.bin", 65536),
        Part::new("firmware.bin", 1048576),
    ]
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Build {
    #[serde(rename = "chipFamily")]
    pub chip_family: String,
    pub parts: Vec<Part>,
}

/// `{version, new_install_prompt_erase, builds}` as read by the web flasher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub version: String,
    pub new_install_prompt_erase: bool,
    pub builds: Vec<Build>,
}

impl Manifest {
    pub fn new(
        version_name: &str,
        chip_family: &str,
        new_install_prompt_erase: bool,
        parts: Vec<Part>,
    ) -> Self {
        Self {
            version: version_name.to_string(),
            new_install_prompt_erase,
            builds: vec![Build {
                chip_family: chip_family.to_string(),
                parts,
            }],
        }
    }

    /// Default manifest content for a version.
    pub fn with_defaults(version_name: &str) -> Self {
        Self::new(version_name, DEFAULT_CHIP_FAMILY, true, default_parts())
    }

    /// Every part across all builds, in manifest order.
    pub fn parts(&self) -> impl Iterator<Item = &Part> {
        self.builds.iter().flat_map(|b| b.parts.iter())
    }
}
