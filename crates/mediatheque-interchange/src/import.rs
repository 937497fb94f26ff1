//! CSV import.
//!
//! Each row is a mapping of named string fields. The `type` field picks
//! the variant to construct; numeric fields arrive as strings and are
//! coerced. Field names accept the historical French headers with their
//! English equivalents as fallbacks.
//!
//! A missing required field or a failed numeric coercion aborts the whole
//! load; no partial entity is ever built. Rows with an unknown `type`
//! discriminator are the one exception: they silently produce no entity,
//! a quirk of the historical data path that is kept as-is.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use mediatheque_core::{Book, DigitalBook, Dvd, Magazine, Media};
use tracing::debug;

use crate::error::InterchangeError;

/// Load entities from CSV rows with a header line.
///
/// Returns the constructed entities in row order.
pub fn load_catalog<R: Read>(reader: R) -> Result<Vec<Media>, InterchangeError> {
    let mut rows = csv::Reader::from_reader(reader);
    let mut medias = Vec::new();
    for (index, row) in rows.deserialize::<HashMap<String, String>>().enumerate() {
        let row = row?;
        if let Some(media) = media_from_row(&row, index + 1)? {
            medias.push(media);
        }
    }
    debug!(count = medias.len(), "catalog loaded");
    Ok(medias)
}

/// Open `path` and load it as a catalog.
///
/// The file is closed on every exit path, error paths included.
pub fn load_catalog_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Media>, InterchangeError> {
    let file = File::open(path)?;
    load_catalog(file)
}

/// Dispatch one row on its discriminator. `Ok(None)` means the row was
/// skipped, not that it failed.
fn media_from_row(
    row: &HashMap<String, String>,
    row_number: usize,
) -> Result<Option<Media>, InterchangeError> {
    let media = match field(row, row_number, &["type"])? {
        "Livre" | "Book" => Media::from(Book::new(
            numeric(row, row_number, &["id"])?,
            field(row, row_number, &["titre", "title"])?.to_string(),
            numeric(row, row_number, &["annee", "year"])?,
            field(row, row_number, &["auteur", "author"])?.to_string(),
            field(row, row_number, &["isbn"])?.to_string(),
        )),
        "Magazine" => Media::from(Magazine::new(
            numeric(row, row_number, &["id"])?,
            field(row, row_number, &["titre", "title"])?.to_string(),
            numeric(row, row_number, &["annee", "year"])?,
            field(row, row_number, &["editeur", "publisher"])?.to_string(),
            field(row, row_number, &["periodicite", "periodicity"])?.to_string(),
        )),
        "DVD" => Media::from(Dvd::new(
            numeric(row, row_number, &["id"])?,
            field(row, row_number, &["titre", "title"])?.to_string(),
            numeric(row, row_number, &["annee", "year"])?,
            field(row, row_number, &["realisateur", "director"])?.to_string(),
            numeric(row, row_number, &["duree", "duration"])?,
        )),
        "LivreNumerique" | "DigitalBook" => Media::from(DigitalBook::new(
            numeric(row, row_number, &["id"])?,
            field(row, row_number, &["titre", "title"])?.to_string(),
            numeric(row, row_number, &["annee", "year"])?,
            field(row, row_number, &["auteur", "author"])?.to_string(),
            field(row, row_number, &["isbn"])?.to_string(),
            numeric(row, row_number, &["taille_fichier", "file_size"])?,
            field(row, row_number, &["format_fichier", "file_format"])?.to_string(),
        )),
        unknown => {
            debug!(row = row_number, kind = unknown, "unknown media type, row skipped");
            return Ok(None);
        }
    };
    Ok(Some(media))
}

/// Look a field up under its accepted names, historical name first.
fn field<'a>(
    row: &'a HashMap<String, String>,
    row_number: usize,
    names: &[&'static str],
) -> Result<&'a str, InterchangeError> {
    names
        .iter()
        .find_map(|name| row.get(*name))
        .map(String::as_str)
        .ok_or(InterchangeError::MissingField {
            row: row_number,
            field: names[0],
        })
}

/// Coerce a string field to a number. Surrounding whitespace is
/// tolerated, anything else is fatal for the load.
fn numeric<T: FromStr>(
    row: &HashMap<String, String>,
    row_number: usize,
    names: &[&'static str],
) -> Result<T, InterchangeError> {
    let raw = field(row, row_number, names)?;
    raw.trim()
        .parse()
        .map_err(|_| InterchangeError::InvalidNumber {
            row: row_number,
            field: names[0],
            value: raw.to_string(),
        })
}
