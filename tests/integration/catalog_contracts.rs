use crate::integration::support::{context, create_json, read_json};
use fwscaffold::tooling::cli::Commands;
use fwscaffold::ScaffoldError;
use serde_json::json;
use tempfile::TempDir;

#[test]
fn list_on_missing_catalog_is_empty() {
    let temp = TempDir::new().unwrap();
    let cli = context(temp.path());

    let out = cli
        .execute(&Commands::List {
            format: "json".to_string(),
        })
        .unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(parsed, json!({"devices": []}));

    let text = cli
        .execute(&Commands::List {
            format: "text".to_string(),
        })
        .unwrap();
    assert!(text.contains("No devices in catalog."));
    assert!(!temp.path().join("firmware").exists());
}

#[test]
fn list_json_matches_catalog_file() {
    let temp = TempDir::new().unwrap();
    let cli = context(temp.path());
    create_json(&cli, "FNK0001", "Default Firmware", "v1.0");
    create_json(&cli, "FNK0002", "Voice", "v0.9");

    let out = cli
        .execute(&Commands::List {
            format: "json".to_string(),
        })
        .unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(parsed, read_json(&temp.path().join("firmware/config.json")));
    assert_eq!(parsed["devices"].as_array().unwrap().len(), 2);
}

#[test]
fn malformed_catalog_is_reported_and_left_alone() {
    let temp = TempDir::new().unwrap();
    let firmware_dir = temp.path().join("firmware");
    std::fs::create_dir_all(&firmware_dir).unwrap();
    std::fs::write(firmware_dir.join("config.json"), "{\"devices\": [").unwrap();

    let cli = context(temp.path());
    let err = cli
        .execute(&Commands::List {
            format: "text".to_string(),
        })
        .unwrap_err();
    assert!(matches!(err, ScaffoldError::CatalogParse { .. }));
    assert_eq!(
        std::fs::read_to_string(firmware_dir.join("config.json")).unwrap(),
        "{\"devices\": ["
    );
}

#[test]
fn hand_written_fields_survive_create() {
    let temp = TempDir::new().unwrap();
    let firmware_dir = temp.path().join("firmware");
    std::fs::create_dir_all(&firmware_dir).unwrap();
    std::fs::write(
        firmware_dir.join("config.json"),
        serde_json::to_string_pretty(&json!({
            "devices": [{
                "id": "fnk0001",
                "name": "FNK0001 Smart Speaker",
                "image": "firmware/fnk0001_device/speaker.png",
                "description": "shown on the landing page",
                "firmwares": [{
                    "id": "default_firmware",
                    "name": "Default Firmware",
                    "image": "firmware/fnk0001_device/default.png",
                    "versions": []
                }]
            }]
        }))
        .unwrap(),
    )
    .unwrap();

    let cli = context(temp.path());
    let report = create_json(&cli, "FNK0001", "Default Firmware", "v1.0");
    assert_eq!(report["outcome"]["kind"], "version_added");

    let catalog = read_json(&firmware_dir.join("config.json"));
    let device = &catalog["devices"][0];
    assert_eq!(device["name"], "FNK0001 Smart Speaker");
    assert_eq!(device["image"], "firmware/fnk0001_device/speaker.png");
    assert_eq!(device["description"], "shown on the landing page");
    assert_eq!(
        device["firmwares"][0]["image"],
        "firmware/fnk0001_device/default.png"
    );
    assert_eq!(device["firmwares"][0]["versions"][0]["id"], "v10");
}
