//! Interchange error types.
//!
//! Semantic errors for the load/export data path. Row-level variants
//! carry the 1-based data-row number so a bad row can be found in the
//! source file.

use thiserror::Error;

/// Errors that can occur while loading or exporting a catalog.
#[derive(Debug, Error)]
pub enum InterchangeError {
    /// The source could not be opened or the sink could not be written.
    #[error("catalog file access failed: {0}")]
    Io(#[from] std::io::Error),

    /// The row source is structurally malformed.
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// The record document could not be serialized.
    #[error("catalog serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// A required field is absent from a row.
    #[error("row {row}: missing required field `{field}`")]
    MissingField { row: usize, field: &'static str },

    /// A numeric field could not be coerced from its string form.
    #[error("row {row}: invalid value `{value}` for numeric field `{field}`")]
    InvalidNumber {
        row: usize,
        field: &'static str,
        value: String,
    },
}
