//! Catalog document types.
//!
//! Field names match the JSON consumed by the flashing frontend. Fields the
//! tool does not know about are kept in `extra` so a load/save cycle never
//! drops hand-written data.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Root catalog document: `{"devices": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub devices: Vec<Device>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    pub id: String,
    pub name: String,
    pub image: String,
    pub firmwares: Vec<Firmware>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Firmware {
    pub id: String,
    pub name: String,
    pub versions: Vec<Version>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Version {
    pub id: String,
    pub name: String,
    pub manifest_path: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn find_device(&self, device_id: &str) -> Option<&Device> {
        self.devices.iter().find(|d| d.id == device_id)
    }

    /// Total number of versions across all devices and firmwares.
    pub fn version_count(&self) -> usize {
        self.devices
            .iter()
            .flat_map(|d| d.firmwares.iter())
            .map(|f| f.versions.len())
            .sum()
    }
}

impl Device {
    pub fn find_firmware(&self, firmware_id: &str) -> Option<&Firmware> {
        self.firmwares.iter().find(|f| f.id == firmware_id)
    }
}

impl Firmware {
    pub fn find_version(&self, version_id: &str) -> Option<&Version> {
        self.versions.iter().find(|v| v.id == version_id)
    }
}
