//! CLI Tooling
//!
//! Command-line interface for scaffolding devices and inspecting the
//! firmware catalog. All operator-facing output is built here.

use crate::catalog::{CatalogStorage, JsonCatalogStorage};
use crate::config::ScaffoldConfig;
use crate::error::ScaffoldError;
use crate::identifier::Identifier;
use crate::logging::LoggingConfig;
use crate::prompt::{collect_answers, DialoguerPrompter, Prompter};
use crate::scaffold::{to_pretty_json, ScaffoldRequest};
use crate::tooling::format::{format_catalog_text, format_create_report_text};
use crate::workflow::ScaffoldWorkflow;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// fwscaffold - scaffold devices and firmware versions for the flashing site
#[derive(Parser)]
#[command(name = "fwscaffold")]
#[command(about = "Scaffold device folders, flashing manifests and catalog entries")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory (contains the firmware folder)
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr, both)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Scaffold a device/firmware/version and add it to the catalog
    Create {
        /// Device name (prompted for when omitted)
        #[arg(long)]
        device: Option<String>,
        /// Firmware name (prompted for when omitted)
        #[arg(long)]
        firmware: Option<String>,
        /// Version name (prompted for when omitted)
        #[arg(long = "version")]
        version_name: Option<String>,
        /// Output format (text or json)
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },
    /// Show the devices, firmwares and versions in the catalog
    List {
        /// Output format (text or json)
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },
    /// Print the identifier a name normalizes to
    Slug {
        /// Human-readable name
        text: String,
    },
}

/// CLI context: resolved workspace and configuration.
pub struct CliContext {
    workspace_root: PathBuf,
    config: ScaffoldConfig,
}

impl CliContext {
    /// Create a new CLI context
    pub fn new(workspace_root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, ScaffoldError> {
        let config = if let Some(cfg_path) = &config_path {
            crate::config::ConfigLoader::load_from_file(cfg_path)?
        } else {
            crate::config::ConfigLoader::load(&workspace_root)?
        };
        Self::with_config(workspace_root, config)
    }

    /// Create a context from an already-built configuration.
    pub fn with_config(workspace_root: PathBuf, config: ScaffoldConfig) -> Result<Self, ScaffoldError> {
        config.validate()?;
        Ok(Self {
            workspace_root,
            config,
        })
    }

    pub fn config(&self) -> &ScaffoldConfig {
        &self.config
    }

    pub fn workspace_root(&self) -> &PathBuf {
        &self.workspace_root
    }

    /// Logging configuration with CLI flags applied over the config file.
    pub fn logging_config(&self, cli: &Cli) -> LoggingConfig {
        let mut logging = self.config.logging.clone();
        if let Some(level) = &cli.log_level {
            logging.level = level.clone();
        }
        if let Some(format) = &cli.log_format {
            logging.format = format.clone();
        }
        if let Some(output) = &cli.log_output {
            logging.output = output.clone();
        }
        if let Some(file) = &cli.log_file {
            logging.file = Some(file.clone());
        }
        logging
    }

    fn catalog_storage(&self) -> JsonCatalogStorage {
        JsonCatalogStorage::new(self.config.layout.catalog_path(&self.workspace_root))
    }

    /// Execute a command, prompting on the terminal when input is needed.
    pub fn execute(&self, command: &Commands) -> Result<String, ScaffoldError> {
        self.execute_with_prompter(command, &mut DialoguerPrompter)
    }

    /// Execute a command with the given prompter.
    pub fn execute_with_prompter(
        &self,
        command: &Commands,
        prompter: &mut dyn Prompter,
    ) -> Result<String, ScaffoldError> {
        match command {
            Commands::Create {
                device,
                firmware,
                version_name,
                format,
            } => self.handle_create(
                prompter,
                device.as_deref(),
                firmware.as_deref(),
                version_name.as_deref(),
                format,
            ),
            Commands::List { format } => self.handle_list(format),
            Commands::Slug { text } => Ok(Identifier::from_name("input", text)?.to_string()),
        }
    }

    fn handle_create(
        &self,
        prompter: &mut dyn Prompter,
        device: Option<&str>,
        firmware: Option<&str>,
        version: Option<&str>,
        format: &str,
    ) -> Result<String, ScaffoldError> {
        let answers = collect_answers(prompter, device, firmware, version)?;
        let request = ScaffoldRequest::from_names(
            &answers.device_name,
            &answers.firmware_name,
            &answers.version_name,
        )?;

        let workflow =
            ScaffoldWorkflow::new(&self.config, &self.workspace_root, self.catalog_storage());
        let report = workflow.create(&request)?;

        if format == "json" {
            return to_pretty_json(&report, "create report").map(|s| s.trim_end().to_string());
        }
        Ok(format_create_report_text(&report, &self.workspace_root))
    }

    fn handle_list(&self, format: &str) -> Result<String, ScaffoldError> {
        let storage = self.catalog_storage();
        let catalog = storage.load()?;
        if format == "json" {
            return to_pretty_json(&catalog, "catalog").map(|s| s.trim_end().to_string());
        }
        Ok(format_catalog_text(&catalog, storage.path()))
    }
}
