//! Error types
//!
//! Every fallible operation in the crate returns `Result<_, ScaffoldError>`.
//! Errors are reported once, at the CLI boundary.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error for scaffolding and catalog operations.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// A name normalized to an empty identifier.
    #[error("{field} name {input:?} does not produce a usable identifier")]
    InvalidIdentifier { field: &'static str, input: String },

    /// Filesystem failure while creating or writing a scaffold artifact.
    #[error("Failed to {action} {}: {source}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Catalog file exists but is not a valid catalog document.
    #[error("Catalog {} is malformed: {source}", path.display())]
    CatalogParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Updated catalog could not be persisted.
    #[error("Failed to write catalog {}: {reason}", path.display())]
    CatalogWrite { path: PathBuf, reason: String },

    /// JSON serialization failure for a generated document.
    #[error("Failed to serialize {what}: {source}")]
    Serialize {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Interactive input could not be read.
    #[error("Failed to read input for {prompt:?}: {reason}")]
    Prompt { prompt: String, reason: String },
}

impl ScaffoldError {
    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ScaffoldError::Io {
            action,
            path: path.into(),
            source,
        }
    }
}

impl From<config::ConfigError> for ScaffoldError {
    fn from(err: config::ConfigError) -> Self {
        ScaffoldError::ConfigError(err.to_string())
    }
}
