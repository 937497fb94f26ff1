//! JSON export.
//!
//! One record per entity, written as a single pretty-printed JSON array.
//! A record is the entity's full stored field set (a digital book's
//! record carries both the book fields and the downloadable fields).
//! Output is UTF-8 and non-ASCII text is written verbatim, never escaped.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use mediatheque_core::Media;
use tracing::debug;

use crate::error::InterchangeError;

/// Serialize `medias` as a record array into `writer`.
pub fn export_catalog<W: Write>(medias: &[Media], mut writer: W) -> Result<(), InterchangeError> {
    serde_json::to_writer_pretty(&mut writer, medias)?;
    writer.flush()?;
    debug!(count = medias.len(), "catalog exported");
    Ok(())
}

/// Create `path` and export the catalog into it.
///
/// The file is closed on every exit path, error paths included.
pub fn export_catalog_to_path<P: AsRef<Path>>(
    medias: &[Media],
    path: P,
) -> Result<(), InterchangeError> {
    let file = File::create(path)?;
    export_catalog(medias, BufWriter::new(file))
}
