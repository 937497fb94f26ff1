//! Core domain types for the mediatheque catalog.
//!
//! This crate holds the pure domain model: the media entity variants,
//! the ordered collection with its merge/exclude algebra, the audit
//! record type, and the process-wide creation counter. It contains no
//! file or serialization-format concerns; those live in
//! `mediatheque-interchange`.
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod registry;

// Re-export commonly used types for convenience
pub use domain::{Book, Collection, DigitalBook, Downloadable, Dvd, Magazine, Media, Operation};
pub use registry::total_count;
