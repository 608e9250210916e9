//! Three-level find-or-create merge of a device/firmware/version triple.

use super::model::{Catalog, Device, Firmware, Version};
use serde::Serialize;
use serde_json::Map;

/// Everything needed to place one version in the catalog.
///
/// Identifiers are expected to be normalized already; matching is exact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub device_id: String,
    pub device_name: String,
    pub image_path: String,
    pub firmware_id: String,
    pub firmware_name: String,
    pub version_id: String,
    pub version_name: String,
    pub manifest_path: String,
}

/// Which level of the catalog an upsert touched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum UpsertOutcome {
    DeviceAdded { device_id: String },
    FirmwareAdded { device_id: String, firmware_id: String },
    VersionAdded {
        device_id: String,
        firmware_id: String,
        version_id: String,
    },
    VersionReplaced {
        device_id: String,
        firmware_id: String,
        version_id: String,
        index: usize,
    },
}

impl UpsertOutcome {
    /// True when the device already existed and was modified in place.
    pub fn is_update(&self) -> bool {
        !matches!(self, UpsertOutcome::DeviceAdded { .. })
    }

    /// Operator-facing warnings for entries that already existed.
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        if self.is_update() {
            warnings.push(format!(
                "Device \"{}\" already exists in the catalog; updating its entry.",
                self.device_id()
            ));
        }
        if let UpsertOutcome::VersionAdded { firmware_id, .. }
        | UpsertOutcome::VersionReplaced { firmware_id, .. } = self
        {
            warnings.push(format!(
                "Firmware \"{}\" already exists on device \"{}\"; updating its versions.",
                firmware_id,
                self.device_id()
            ));
        }
        if let UpsertOutcome::VersionReplaced {
            firmware_id,
            version_id,
            ..
        } = self
        {
            warnings.push(format!(
                "Version \"{}\" already exists in firmware \"{}\" of device \"{}\"; replacing it.",
                version_id,
                firmware_id,
                self.device_id()
            ));
        }
        warnings
    }

    pub fn device_id(&self) -> &str {
        match self {
            UpsertOutcome::DeviceAdded { device_id }
            | UpsertOutcome::FirmwareAdded { device_id, .. }
            | UpsertOutcome::VersionAdded { device_id, .. }
            | UpsertOutcome::VersionReplaced { device_id, .. } => device_id,
        }
    }

    /// One-line description of what changed.
    pub fn summary(&self) -> String {
        match self {
            UpsertOutcome::DeviceAdded { device_id } => {
                format!("Added new device \"{}\"", device_id)
            }
            UpsertOutcome::FirmwareAdded {
                device_id,
                firmware_id,
            } => format!(
                "Added firmware \"{}\" to existing device \"{}\"",
                firmware_id, device_id
            ),
            UpsertOutcome::VersionAdded {
                device_id,
                firmware_id,
                version_id,
            } => format!(
                "Added version \"{}\" to firmware \"{}\" of device \"{}\"",
                version_id, firmware_id, device_id
            ),
            UpsertOutcome::VersionReplaced {
                device_id,
                firmware_id,
                version_id,
                ..
            } => format!(
                "Replaced version \"{}\" in firmware \"{}\" of device \"{}\"",
                version_id, firmware_id, device_id
            ),
        }
    }
}

impl CatalogEntry {
    fn version(&self) -> Version {
        Version {
            id: self.version_id.clone(),
            name: self.version_name.clone(),
            manifest_path: self.manifest_path.clone(),
            extra: Map::new(),
        }
    }

    fn firmware(&self) -> Firmware {
        Firmware {
            id: self.firmware_id.clone(),
            name: self.firmware_name.clone(),
            versions: vec![self.version()],
            extra: Map::new(),
        }
    }

    fn device(&self) -> Device {
        Device {
            id: self.device_id.clone(),
            name: self.device_name.clone(),
            image: self.image_path.clone(),
            firmwares: vec![self.firmware()],
            extra: Map::new(),
        }
    }
}

/// Merge `entry` into `catalog`.
///
/// Walks device, firmware, version by id. The first missing level gets a new
/// node appended at the end of its sequence; if all three exist the version
/// is replaced wholesale at its current position. An existing device keeps
/// its name and image.
pub fn upsert(mut catalog: Catalog, entry: &CatalogEntry) -> (Catalog, UpsertOutcome) {
    let Some(device) = catalog
        .devices
        .iter_mut()
        .find(|d| d.id == entry.device_id)
    else {
        catalog.devices.push(entry.device());
        let outcome = UpsertOutcome::DeviceAdded {
            device_id: entry.device_id.clone(),
        };
        return (catalog, outcome);
    };

    let Some(firmware) = device
        .firmwares
        .iter_mut()
        .find(|f| f.id == entry.firmware_id)
    else {
        device.firmwares.push(entry.firmware());
        let outcome = UpsertOutcome::FirmwareAdded {
            device_id: entry.device_id.clone(),
            firmware_id: entry.firmware_id.clone(),
        };
        return (catalog, outcome);
    };

    let outcome = match firmware
        .versions
        .iter()
        .position(|v| v.id == entry.version_id)
    {
        Some(index) => {
            firmware.versions[index] = entry.version();
            UpsertOutcome::VersionReplaced {
                device_id: entry.device_id.clone(),
                firmware_id: entry.firmware_id.clone(),
                version_id: entry.version_id.clone(),
                index,
            }
        }
        None => {
            firmware.versions.push(entry.version());
            UpsertOutcome::VersionAdded {
                device_id: entry.device_id.clone(),
                firmware_id: entry.firmware_id.clone(),
                version_id: entry.version_id.clone(),
            }
        }
    };

    (catalog, outcome)
}
