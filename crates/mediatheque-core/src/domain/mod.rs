//! Core domain types.
//!
//! These types represent the pure catalog model, independent of any
//! infrastructure concerns (file formats, row readers, record writers).
//!
//! # Structure
//!
//! - `media` - Entity variants (`Book`, `Magazine`, `Dvd`, `DigitalBook`)
//! - `collection` - Ordered collection with merge/exclude algebra
//! - `operation` - Audit record type

pub mod collection;
pub mod media;
pub mod operation;

// Re-export entity types at the domain level for convenience
pub use collection::Collection;
pub use media::{Book, DigitalBook, Downloadable, Dvd, Magazine, Media};
pub use operation::Operation;
