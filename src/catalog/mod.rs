//! Firmware Catalog
//!
//! The catalog is the single JSON document listing every device, its
//! firmwares, and their versions. Merging is a pure function over the
//! catalog value; storage is kept behind `CatalogStorage`.

pub mod model;
pub mod storage;
pub mod upsert;

pub use model::{Catalog, Device, Firmware, Version};
pub use storage::{CatalogStorage, JsonCatalogStorage};
pub use upsert::{upsert, CatalogEntry, UpsertOutcome};
