//! File interchange for the mediatheque catalog.
//!
//! Loads entities from CSV rows (`import`) and writes them out as JSON
//! records (`export`). The batch data path is deliberately non-resilient:
//! any I/O or parse failure surfaces immediately to the caller, with one
//! historical exception — rows with an unknown `type` discriminator are
//! skipped without error.
#![deny(unused_crate_dependencies)]

pub mod error;
pub mod export;
pub mod import;

pub use error::InterchangeError;
pub use export::{export_catalog, export_catalog_to_path};
pub use import::{load_catalog, load_catalog_from_path};

// Silence unused dev-dependency warnings: tempfile is exercised in the
// integration tests only
#[cfg(test)]
use tempfile as _;
