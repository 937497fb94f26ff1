//! Process-wide creation counter.
//!
//! Starts at zero when the process starts and only ever goes up: one
//! increment per entity construction, across every variant. Dropping an
//! entity does not decrement anything; this counts creations, not live
//! instances.

use std::sync::atomic::{AtomicU64, Ordering};

static MEDIA_CREATED: AtomicU64 = AtomicU64::new(0);

/// Bump the counter. Called from the shared base-construction path in
/// the media module, and nowhere else.
pub(crate) fn record_creation() {
    // The count has no ordering relationship with any other memory.
    MEDIA_CREATED.fetch_add(1, Ordering::Relaxed);
}

/// Cumulative number of entities constructed since process start.
#[must_use]
pub fn total_count() -> u64 {
    MEDIA_CREATED.load(Ordering::Relaxed)
}
