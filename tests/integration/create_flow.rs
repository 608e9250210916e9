use crate::integration::support::{context, create_json, read_json};
use serde_json::json;
use tempfile::TempDir;

#[test]
fn create_scaffolds_files_and_catalog() {
    let temp = TempDir::new().unwrap();
    let cli = context(temp.path());
    let report = create_json(&cli, "FNK0001", "Default Firmware", "v1.0");

    assert_eq!(report["outcome"]["kind"], "device_added");
    assert_eq!(report["request"]["device_id"], "fnk0001");
    assert_eq!(report["request"]["firmware_id"], "default_firmware");
    assert_eq!(report["request"]["version_id"], "v10");
    assert_eq!(report["warnings"], json!([]));

    let device_root = temp.path().join("firmware").join("fnk0001_device");
    assert_eq!(
        read_json(&device_root.join("fnk0001.json")),
        json!({"name": "FNK0001", "image": "fnk0001.png"})
    );
    assert!(device_root.join("fnk0001.png").is_file());

    let version_root = device_root.join("firmwares").join("v10");
    let manifest = read_json(&version_root.join("v10.json"));
    assert_eq!(manifest["version"], "v1.0");
    assert_eq!(manifest["new_install_prompt_erase"], true);
    assert_eq!(manifest["builds"][0]["chipFamily"], "ESP32-S3");
    assert_eq!(manifest["builds"][0]["parts"][4], json!({"path": "firmware.bin", "offset": 1048576}));

    for bin in [
        "bootloader.bin",
        "partition-table.bin",
        "ota_data_initial.bin",
        "srmodels.bin",
        "firmware.bin",
    ] {
        let meta = std::fs::metadata(version_root.join(bin)).unwrap();
        assert_eq!(meta.len(), 0, "{bin} should be an empty placeholder");
    }

    assert_eq!(
        read_json(&temp.path().join("firmware").join("config.json")),
        json!({
            "devices": [{
                "id": "fnk0001",
                "name": "FNK0001",
                "image": "firmware/fnk0001_device/fnk0001.png",
                "firmwares": [{
                    "id": "default_firmware",
                    "name": "Default Firmware",
                    "versions": [{
                        "id": "v10",
                        "name": "v1.0",
                        "manifest_path": "firmware/fnk0001_device/firmwares/v10/v10.json"
                    }]
                }]
            }]
        })
    );
}

#[test]
fn second_version_is_appended() {
    let temp = TempDir::new().unwrap();
    let cli = context(temp.path());
    create_json(&cli, "FNK0001", "Default Firmware", "v1.0");
    let report = create_json(&cli, "FNK0001", "Default Firmware", "v2.0");

    assert_eq!(report["outcome"]["kind"], "version_added");
    assert_eq!(report["warnings"].as_array().unwrap().len(), 2);

    let catalog = read_json(&temp.path().join("firmware/config.json"));
    let versions = catalog["devices"][0]["firmwares"][0]["versions"]
        .as_array()
        .unwrap();
    assert_eq!(versions.len(), 2);
    assert_eq!(versions[0]["id"], "v10");
    assert_eq!(versions[0]["name"], "v1.0");
    assert_eq!(versions[1]["id"], "v20");
}

#[test]
fn same_version_id_is_replaced() {
    let temp = TempDir::new().unwrap();
    let cli = context(temp.path());
    create_json(&cli, "FNK0001", "Default Firmware", "v1.0");
    let report = create_json(&cli, "fnk0001", "Default Firmware", "V1.0");

    assert_eq!(report["outcome"]["kind"], "version_replaced");
    assert_eq!(report["outcome"]["index"], 0);

    let catalog = read_json(&temp.path().join("firmware/config.json"));
    assert_eq!(catalog["devices"].as_array().unwrap().len(), 1);
    assert_eq!(catalog["devices"][0]["name"], "FNK0001");
    let versions = catalog["devices"][0]["firmwares"][0]["versions"]
        .as_array()
        .unwrap();
    assert_eq!(versions.len(), 1);
    assert_eq!(versions[0]["name"], "V1.0");
}

#[test]
fn rerun_keeps_real_binaries() {
    let temp = TempDir::new().unwrap();
    let cli = context(temp.path());
    create_json(&cli, "FNK0001", "Default Firmware", "v1.0");

    let firmware_bin = temp
        .path()
        .join("firmware/fnk0001_device/firmwares/v10/firmware.bin");
    std::fs::write(&firmware_bin, b"\xE9real firmware").unwrap();

    let report = create_json(&cli, "FNK0001", "Default Firmware", "v1.0");
    let kept: Vec<_> = report["scaffold"]["artifacts"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|a| a["action"] == "skipped")
        .collect();
    assert_eq!(kept.len(), 5);
    assert_eq!(std::fs::read(&firmware_bin).unwrap(), b"\xE9real firmware");
}

#[test]
fn non_ascii_names_are_written_literally() {
    let temp = TempDir::new().unwrap();
    let cli = context(temp.path());
    let report = create_json(&cli, "FNK0002", "默认固件", "v1.0");
    assert_eq!(report["request"]["firmware_id"], "默认固件");

    let raw = std::fs::read_to_string(temp.path().join("firmware/config.json")).unwrap();
    assert!(raw.contains("\"name\": \"默认固件\""));
    assert!(!raw.contains("\\u"));
}
