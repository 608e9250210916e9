use clap::{CommandFactory, Parser};
use fwscaffold::tooling::cli::{Cli, Commands};

#[test]
fn parse_valid_command_matrix() {
    let cases: Vec<Vec<&str>> = vec![
        vec!["fwscaffold", "create"],
        vec![
            "fwscaffold",
            "create",
            "--device",
            "FNK0001",
            "--firmware",
            "Default Firmware",
            "--version",
            "v1.0",
        ],
        vec!["fwscaffold", "create", "--format", "json"],
        vec!["fwscaffold", "list"],
        vec!["fwscaffold", "list", "--format", "json"],
        vec!["fwscaffold", "slug", "Default Firmware"],
        vec!["fwscaffold", "--workspace", "/srv/site", "list"],
        vec!["fwscaffold", "--log-level", "debug", "--log-output", "stderr", "list"],
    ];

    for args in cases {
        let parsed = Cli::try_parse_from(args.clone());
        assert!(parsed.is_ok(), "expected valid parse for args: {args:?}");
    }
}

#[test]
fn parse_rejects_unknown_format() {
    assert!(Cli::try_parse_from(["fwscaffold", "list", "--format", "yaml"]).is_err());
    assert!(Cli::try_parse_from(["fwscaffold", "slug"]).is_err());
    assert!(Cli::try_parse_from(["fwscaffold"]).is_err());
}

#[test]
fn create_flags_map_to_command_fields() {
    let cli = Cli::try_parse_from([
        "fwscaffold",
        "create",
        "--device",
        "FNK0001",
        "--version",
        "v1.0",
    ])
    .unwrap();
    assert_eq!(
        cli.command,
        Commands::Create {
            device: Some("FNK0001".to_string()),
            firmware: None,
            version_name: Some("v1.0".to_string()),
            format: "text".to_string(),
        }
    );
}

#[test]
fn command_definition_is_consistent() {
    Cli::command().debug_assert();
}
