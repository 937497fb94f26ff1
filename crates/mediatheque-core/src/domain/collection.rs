//! Ordered collections of media entities.
//!
//! Insertion order is preserved everywhere. The two algebra operations,
//! [`Collection::merge`] and [`Collection::exclude`], are pure: they
//! build a new collection and leave their inputs untouched.

use std::fmt;

use super::media::Media;

/// An ordered sequence of entities.
///
/// Duplicates are allowed; nothing here dedups by id.
#[derive(Debug, Clone, Default)]
pub struct Collection {
    items: Vec<Media>,
}

impl Collection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_items(items: Vec<Media>) -> Self {
        Self { items }
    }

    pub fn push(&mut self, media: Media) {
        self.items.push(media);
    }

    #[must_use]
    pub fn items(&self) -> &[Media] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Concatenation: all of `self`'s items first, then all of `other`'s,
    /// relative order of each side preserved.
    #[must_use]
    pub fn merge(&self, other: &Self) -> Self {
        let mut items = self.items.clone();
        items.extend(other.items.iter().cloned());
        Self { items }
    }

    /// Every item whose id differs from `id`, order preserved.
    ///
    /// Removes all matches, not just the first. When nothing matches the
    /// result is an unchanged copy, so the operation is idempotent.
    #[must_use]
    pub fn exclude(&self, id: i64) -> Self {
        Self {
            items: self
                .items
                .iter()
                .filter(|media| media.id() != id)
                .cloned()
                .collect(),
        }
    }
}

impl From<Vec<Media>> for Collection {
    fn from(items: Vec<Media>) -> Self {
        Self::from_items(items)
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a Media;
    type IntoIter = std::slice::Iter<'a, Media>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// One entity rendering per line, in sequence order.
impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, media) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{media}")?;
        }
        Ok(())
    }
}
