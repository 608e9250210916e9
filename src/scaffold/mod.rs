//! Scaffold Builder
//!
//! Computes the on-disk layout for a device/firmware/version triple and
//! creates the folders, descriptor, image placeholder, manifest and empty
//! binaries the flashing site expects. Descriptor, placeholder and manifest
//! are always rewritten; binaries are only created when missing, since real
//! firmware may already be sitting there.

pub mod manifest;

use crate::error::ScaffoldError;
use crate::identifier::Identifier;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub use manifest::{default_parts, Build, Manifest, Part, DEFAULT_CHIP_FAMILY};

/// Pretty JSON with two-space indentation, literal non-ASCII and a trailing
/// newline.
pub fn to_pretty_json<T: Serialize>(value: &T, what: &'static str) -> Result<String, ScaffoldError> {
    let mut content = serde_json::to_string_pretty(value)
        .map_err(|e| ScaffoldError::Serialize { what, source: e })?;
    content.push('\n');
    Ok(content)
}

/// Normalized identifiers plus the names the operator typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaffoldRequest {
    pub device_id: Identifier,
    pub device_name: String,
    pub firmware_id: Identifier,
    pub firmware_name: String,
    pub version_id: Identifier,
    pub version_name: String,
}

impl ScaffoldRequest {
    /// Normalize all three names; fails on the first empty identifier.
    pub fn from_names(
        device_name: &str,
        firmware_name: &str,
        version_name: &str,
    ) -> Result<Self, ScaffoldError> {
        Ok(Self {
            device_id: Identifier::from_name("device", device_name)?,
            device_name: device_name.to_string(),
            firmware_id: Identifier::from_name("firmware", firmware_name)?,
            firmware_name: firmware_name.to_string(),
            version_id: Identifier::from_name("version", version_name)?,
            version_name: version_name.to_string(),
        })
    }
}

/// Paths for one device/version under the firmware root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldLayout {
    pub firmware_root: PathBuf,
    pub device_root: PathBuf,
    pub device_descriptor: PathBuf,
    pub image: PathBuf,
    pub version_root: PathBuf,
    pub version_manifest: PathBuf,
    device_id: String,
    version_id: String,
    catalog_prefix: String,
}

impl ScaffoldLayout {
    pub fn new(
        firmware_root: &Path,
        catalog_prefix: &str,
        device_id: &Identifier,
        version_id: &Identifier,
    ) -> Self {
        let device_root = firmware_root.join(format!("{}_device", device_id));
        let version_root = device_root.join("firmwares").join(version_id.as_str());
        Self {
            firmware_root: firmware_root.to_path_buf(),
            device_descriptor: device_root.join(format!("{}.json", device_id)),
            image: device_root.join(format!("{}.png", device_id)),
            version_manifest: version_root.join(format!("{}.json", version_id)),
            device_root,
            version_root,
            device_id: device_id.to_string(),
            version_id: version_id.to_string(),
            catalog_prefix: catalog_prefix.trim_matches('/').to_string(),
        }
    }

    /// Image file name as stored in the device descriptor.
    pub fn image_file_name(&self) -> String {
        format!("{}.png", self.device_id)
    }

    /// Image path as referenced from the catalog, e.g.
    /// `firmware/fnk0001_device/fnk0001.png`.
    pub fn catalog_image_path(&self) -> String {
        self.catalog_path(&[
            &format!("{}_device", self.device_id),
            &self.image_file_name(),
        ])
    }

    /// Manifest path as referenced from the catalog.
    pub fn catalog_manifest_path(&self) -> String {
        self.catalog_path(&[
            &format!("{}_device", self.device_id),
            "firmwares",
            &self.version_id,
            &format!("{}.json", self.version_id),
        ])
    }

    fn catalog_path(&self, segments: &[&str]) -> String {
        let mut parts: Vec<&str> = Vec::with_capacity(segments.len() + 1);
        if !self.catalog_prefix.is_empty() {
            parts.push(&self.catalog_prefix);
        }
        parts.extend_from_slice(segments);
        parts.join("/")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactKind {
    Directory,
    DeviceDescriptor,
    ImagePlaceholder,
    VersionManifest,
    Binary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactAction {
    Created,
    Overwritten,
    /// Directory was already present.
    Existing,
    /// Binary was already present and left alone.
    Skipped,
}

impl ArtifactAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArtifactAction::Created => "created",
            ArtifactAction::Overwritten => "overwritten",
            ArtifactAction::Existing => "exists",
            ArtifactAction::Skipped => "kept",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaffoldArtifact {
    pub kind: ArtifactKind,
    pub path: PathBuf,
    pub action: ArtifactAction,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaffoldReport {
    pub artifacts: Vec<ScaffoldArtifact>,
}

impl ScaffoldReport {
    pub fn count(&self, action: ArtifactAction) -> usize {
        self.artifacts.iter().filter(|a| a.action == action).count()
    }
}

/// Creates the scaffold for one request.
pub struct ScaffoldBuilder {
    layout: ScaffoldLayout,
    device_name: String,
    manifest: Manifest,
}

impl ScaffoldBuilder {
    pub fn new(layout: ScaffoldLayout, device_name: &str, manifest: Manifest) -> Self {
        Self {
            layout,
            device_name: device_name.to_string(),
            manifest,
        }
    }

    pub fn layout(&self) -> &ScaffoldLayout {
        &self.layout
    }

    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Run every step in order.
    pub fn build_all(&self) -> Result<ScaffoldReport, ScaffoldError> {
        let mut report = ScaffoldReport::default();
        report.artifacts.extend(self.ensure_directories()?);
        report.artifacts.push(self.write_device_descriptor()?);
        report.artifacts.push(self.write_image_placeholder()?);
        report.artifacts.push(self.write_version_manifest()?);
        report.artifacts.extend(self.write_placeholder_binaries()?);
        Ok(report)
    }

    /// Create the device and version folders; existing folders are fine.
    pub fn ensure_directories(&self) -> Result<Vec<ScaffoldArtifact>, ScaffoldError> {
        [&self.layout.device_root, &self.layout.version_root]
            .into_iter()
            .map(|dir| -> Result<ScaffoldArtifact, ScaffoldError> {
                let action = if dir.is_dir() {
                    ArtifactAction::Existing
                } else {
                    ArtifactAction::Created
                };
                std::fs::create_dir_all(dir)
                    .map_err(|e| ScaffoldError::io("create directory", dir, e))?;
                tracing::info!("Directory {} ({})", dir.display(), action.as_str());
                Ok(ScaffoldArtifact {
                    kind: ArtifactKind::Directory,
                    path: dir.clone(),
                    action,
                })
            })
            .collect()
    }

    /// Write `{name, image}`; always replaces an existing descriptor.
    pub fn write_device_descriptor(&self) -> Result<ScaffoldArtifact, ScaffoldError> {
        let descriptor = DeviceDescriptor {
            name: self.device_name.clone(),
            image: self.layout.image_file_name(),
        };
        let content = to_pretty_json(&descriptor, "device descriptor")?;
        overwrite(
            ArtifactKind::DeviceDescriptor,
            &self.layout.device_descriptor,
            content.as_bytes(),
        )
    }

    /// Write a text marker where the device image belongs. Overwrites
    /// whatever is there.
    pub fn write_image_placeholder(&self) -> Result<ScaffoldArtifact, ScaffoldError> {
        let content = format!(
            "// Placeholder image for device {}. Replace this file with a real PNG image.\n",
            self.device_name
        );
        overwrite(
            ArtifactKind::ImagePlaceholder,
            &self.layout.image,
            content.as_bytes(),
        )
    }

    pub fn write_version_manifest(&self) -> Result<ScaffoldArtifact, ScaffoldError> {
        let content = to_pretty_json(&self.manifest, "version manifest")?;
        overwrite(
            ArtifactKind::VersionManifest,
            &self.layout.version_manifest,
            content.as_bytes(),
        )
    }

    /// Create an empty file for every manifest part that is not there yet.
    pub fn write_placeholder_binaries(&self) -> Result<Vec<ScaffoldArtifact>, ScaffoldError> {
        let mut artifacts = Vec::new();
        for part in self.manifest.parts() {
            let path = self.layout.version_root.join(&part.path);
            let created = std::fs::OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&path);
            let action = match created {
                Ok(_) => ArtifactAction::Created,
                Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
                    ArtifactAction::Skipped
                }
                Err(e) => return Err(ScaffoldError::io("create binary", &path, e)),
            };
            tracing::info!("Binary {} ({})", path.display(), action.as_str());
            artifacts.push(ScaffoldArtifact {
                kind: ArtifactKind::Binary,
                path,
                action,
            });
        }
        Ok(artifacts)
    }
}

/// Device descriptor: `{"name", "image"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceDescriptor {
    pub name: String,
    pub image: String,
}

fn overwrite(
    kind: ArtifactKind,
    path: &Path,
    content: &[u8],
) -> Result<ScaffoldArtifact, ScaffoldError> {
    let action = if path.exists() {
        ArtifactAction::Overwritten
    } else {
        ArtifactAction::Created
    };
    std::fs::write(path, content).map_err(|e| ScaffoldError::io("write", path, e))?;
    tracing::info!("File {} ({})", path.display(), action.as_str());
    Ok(ScaffoldArtifact {
        kind,
        path: path.to_path_buf(),
        action,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn request() -> ScaffoldRequest {
        ScaffoldRequest::from_names("FNK0001", "Default Firmware", "v1.0").unwrap()
    }

    fn builder(root: &Path) -> ScaffoldBuilder {
        let req = request();
        let layout = ScaffoldLayout::new(root, "firmware", &req.device_id, &req.version_id);
        ScaffoldBuilder::new(layout, &req.device_name, Manifest::with_defaults(&req.version_name))
    }

    #[test]
    fn test_layout_paths() {
        let req = request();
        let layout = ScaffoldLayout::new(Path::new("fw"), "firmware", &req.device_id, &req.version_id);
        assert_eq!(layout.device_root, PathBuf::from("fw/fnk0001_device"));
        assert_eq!(
            layout.device_descriptor,
            PathBuf::from("fw/fnk0001_device/fnk0001.json")
        );
        assert_eq!(layout.image, PathBuf::from("fw/fnk0001_device/fnk0001.png"));
        assert_eq!(
            layout.version_root,
            PathBuf::from("fw/fnk0001_device/firmwares/v10")
        );
        assert_eq!(
            layout.version_manifest,
            PathBuf::from("fw/fnk0001_device/firmwares/v10/v10.json")
        );
        assert_eq!(
            layout.catalog_image_path(),
            "firmware/fnk0001_device/fnk0001.png"
        );
        assert_eq!(
            layout.catalog_manifest_path(),
            "firmware/fnk0001_device/firmwares/v10/v10.json"
        );
    }

    #[test]
    fn test_catalog_paths_without_prefix() {
        let req = request();
        let layout = ScaffoldLayout::new(Path::new("."), "", &req.device_id, &req.version_id);
        assert_eq!(layout.catalog_image_path(), "fnk0001_device/fnk0001.png");
    }

    #[test]
    fn test_request_rejects_empty_identifier() {
        let err = ScaffoldRequest::from_names("FNK0001", "***", "v1").unwrap_err();
        assert!(matches!(
            err,
            ScaffoldError::InvalidIdentifier { field: "firmware", .. }
        ));
    }

    #[test]
    fn test_ensure_directories_twice() {
        let temp = TempDir::new().unwrap();
        let b = builder(temp.path());

        let first = b.ensure_directories().unwrap();
        assert!(first.iter().all(|a| a.action == ArtifactAction::Created));
        let marker = b.layout().version_root.join("keep.txt");
        std::fs::write(&marker, "x").unwrap();

        let second = b.ensure_directories().unwrap();
        assert!(second.iter().all(|a| a.action == ArtifactAction::Existing));
        assert!(b.layout().device_root.is_dir());
        assert_eq!(std::fs::read_to_string(&marker).unwrap(), "x");
        assert_eq!(
            std::fs::read_dir(&b.layout().version_root).unwrap().count(),
            1
        );
    }

    #[test]
    fn test_descriptor_content_and_overwrite() {
        let temp = TempDir::new().unwrap();
        let b = builder(temp.path());
        b.ensure_directories().unwrap();
        std::fs::write(&b.layout().device_descriptor, "stale").unwrap();

        let artifact = b.write_device_descriptor().unwrap();
        assert_eq!(artifact.action, ArtifactAction::Overwritten);
        let raw = std::fs::read_to_string(&b.layout().device_descriptor).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"name": "FNK0001", "image": "fnk0001.png"})
        );
    }

    #[test]
    fn test_image_placeholder_overwrites_existing_file() {
        let temp = TempDir::new().unwrap();
        let b = builder(temp.path());
        b.ensure_directories().unwrap();
        std::fs::write(&b.layout().image, [0x89, b'P', b'N', b'G']).unwrap();

        let artifact = b.write_image_placeholder().unwrap();
        assert_eq!(artifact.action, ArtifactAction::Overwritten);
        let text = std::fs::read_to_string(&b.layout().image).unwrap();
        assert!(text.contains("FNK0001"));
    }

    #[test]
    fn test_placeholder_binaries_keep_existing_content() {
        let temp = TempDir::new().unwrap();
        let b = builder(temp.path());
        b.ensure_directories().unwrap();
        let firmware_bin = b.layout().version_root.join("firmware.bin");
        std::fs::write(&firmware_bin, [1u8, 2, 3, 4]).unwrap();

        let artifacts = b.write_placeholder_binaries().unwrap();
        assert_eq!(artifacts.len(), 5);
        assert_eq!(std::fs::read(&firmware_bin).unwrap(), vec![1u8, 2, 3, 4]);
        let kept: Vec<_> = artifacts
            .iter()
            .filter(|a| a.action == ArtifactAction::Skipped)
            .collect();
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].path, firmware_bin);

        let bootloader = b.layout().version_root.join("bootloader.bin");
        assert_eq!(std::fs::metadata(bootloader).unwrap().len(), 0);
    }

    #[test]
    fn test_build_all_rerun_is_safe() {
        let temp = TempDir::new().unwrap();
        let b = builder(temp.path());
        let first = b.build_all().unwrap();
        assert_eq!(first.artifacts.len(), 10);
        assert_eq!(first.count(ArtifactAction::Created), 10);

        let second = b.build_all().unwrap();
        assert_eq!(second.count(ArtifactAction::Existing), 2);
        assert_eq!(second.count(ArtifactAction::Overwritten), 3);
        assert_eq!(second.count(ArtifactAction::Skipped), 5);

        let manifest: Manifest = serde_json::from_str(
            &std::fs::read_to_string(&b.layout().version_manifest).unwrap(),
        )
        .unwrap();
        assert_eq!(manifest, Manifest::with_defaults("v1.0"));
    }

    #[test]
    fn test_missing_parent_is_io_error() {
        let temp = TempDir::new().unwrap();
        let b = builder(temp.path());
        let err = b.write_version_manifest().unwrap_err();
        assert!(matches!(err, ScaffoldError::Io { .. }));
    }
}
