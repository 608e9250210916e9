//! Format create reports and catalog listings as text.

use crate::catalog::Catalog;
use crate::workflow::CreateReport;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;
use std::path::Path;

/// Format a section heading with bold/underline.
pub fn format_section_heading(title: &str) -> String {
    format!("{}", title.bold().underline())
}

/// Strip the workspace root so paths print short.
fn display_path(path: &Path, workspace_root: &Path) -> String {
    path.strip_prefix(workspace_root)
        .unwrap_or(path)
        .display()
        .to_string()
}

/// Format a create run as human-readable text.
pub fn format_create_report_text(report: &CreateReport, workspace_root: &Path) -> String {
    let req = &report.request;
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", format_section_heading("New device")));
    out.push_str(&format!(
        "  Device:   {} (ID: {})\n",
        req.device_name, req.device_id
    ));
    out.push_str(&format!(
        "  Firmware: {} (ID: {})\n",
        req.firmware_name, req.firmware_id
    ));
    out.push_str(&format!(
        "  Version:  {} (ID: {})\n\n",
        req.version_name, req.version_id
    ));

    out.push_str(&format!("{}\n\n", format_section_heading("Files")));
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Path", "Action"]);
    for artifact in &report.scaffold.artifacts {
        table.add_row(vec![
            display_path(&artifact.path, workspace_root),
            artifact.action.as_str().to_string(),
        ]);
    }
    out.push_str(&format!("{}\n\n", table));

    if !report.warnings.is_empty() {
        for warning in &report.warnings {
            out.push_str(&format!("{} {}\n", "Warning:".yellow().bold(), warning));
        }
        out.push('\n');
    }

    out.push_str(&format!(
        "{}. Updated {}\n\n",
        report.outcome.summary(),
        display_path(&report.catalog_path, workspace_root)
    ));
    out.push_str("New device and firmware structure created successfully.");
    out
}

/// Format the catalog as one row per version.
pub fn format_catalog_text(catalog: &Catalog, catalog_path: &Path) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", format_section_heading("Catalog")));
    out.push_str(&format!("  Path: {}\n\n", catalog_path.display()));
    if catalog.devices.is_empty() {
        out.push_str("No devices in catalog.\n");
        return out;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Device", "Firmware", "Version", "Manifest"]);
    for device in &catalog.devices {
        if device.firmwares.is_empty() {
            table.add_row(vec![
                device_label(&device.name, &device.id),
                "-".to_string(),
                "-".to_string(),
                "-".to_string(),
            ]);
        }
        for firmware in &device.firmwares {
            if firmware.versions.is_empty() {
                table.add_row(vec![
                    device_label(&device.name, &device.id),
                    device_label(&firmware.name, &firmware.id),
                    "-".to_string(),
                    "-".to_string(),
                ]);
            }
            for version in &firmware.versions {
                table.add_row(vec![
                    device_label(&device.name, &device.id),
                    device_label(&firmware.name, &firmware.id),
                    device_label(&version.name, &version.id),
                    version.manifest_path.clone(),
                ]);
            }
        }
    }
    out.push_str(&format!("{}\n\n", table));
    out.push_str(&format!(
        "Total: {} devices, {} versions.\n",
        catalog.devices.len(),
        catalog.version_count()
    ));
    out
}

fn device_label(name: &str, id: &str) -> String {
    if name == id {
        id.to_string()
    } else {
        format!("{} ({})", name, id)
    }
}
