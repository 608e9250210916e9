use fwscaffold::config::ScaffoldConfig;
use fwscaffold::prompt::ScriptedPrompter;
use fwscaffold::tooling::cli::{CliContext, Commands};
use std::path::Path;

pub fn context(root: &Path) -> CliContext {
    CliContext::with_config(root.to_path_buf(), ScaffoldConfig::default()).unwrap()
}

pub fn create_json(cli: &CliContext, device: &str, firmware: &str, version: &str) -> serde_json::Value {
    let mut prompter = ScriptedPrompter::new([device, firmware, version]);
    let out = cli
        .execute_with_prompter(
            &Commands::Create {
                device: None,
                firmware: None,
                version_name: None,
                format: "json".to_string(),
            },
            &mut prompter,
        )
        .unwrap();
    serde_json::from_str(&out).unwrap()
}

pub fn read_json(path: &Path) -> serde_json::Value {
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}
