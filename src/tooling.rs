//! Tooling & Integration Layer
//!
//! Provides the CLI and its text rendering. Everything that talks to the
//! operator lives here; the library modules below it only return values.

pub mod cli;
pub mod format;

pub use cli::{Cli, CliContext, Commands};
