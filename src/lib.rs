//! fwscaffold: Firmware Catalog Scaffolding
//!
//! Creates the folder layout, device descriptor, flashing manifest and
//! placeholder binaries for a device/firmware/version, and merges the new
//! entry into the catalog the flashing site reads.

pub mod catalog;
pub mod config;
pub mod error;
pub mod identifier;
pub mod logging;
pub mod prompt;
pub mod scaffold;
pub mod tooling;
pub mod workflow;

pub use error::ScaffoldError;
pub use identifier::{normalize, Identifier};
