//! Media entity types.
//!
//! Every catalog entity carries the shared base fields (id, title, year)
//! plus variant-specific fields. The base fields live in [`MediaInfo`],
//! which is only constructible through a variant constructor; that single
//! construction path is also where the creation counter is bumped, so
//! each entity is counted exactly once regardless of variant.
//!
//! Equality between entities compares ids only. Two entities with the
//! same id are equal even when their titles, years, or variants differ.

use std::fmt;

use serde::Serialize;

use crate::registry;

/// Base fields shared by every entity.
///
/// Ids are assigned by the caller and never regenerated; uniqueness is
/// the caller's responsibility, not enforced here. Titles and years are
/// stored as given, without validation.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct MediaInfo {
    id: i64,
    title: String,
    year: i32,
}

impl MediaInfo {
    /// The shared construction path. Every variant funnels through here
    /// exactly once, which is what keeps the creation counter honest.
    fn new(id: i64, title: String, year: i32) -> Self {
        registry::record_creation();
        Self { id, title, year }
    }
}

/// A printed book.
#[derive(Debug, Clone, Serialize)]
pub struct Book {
    #[serde(flatten)]
    info: MediaInfo,
    pub author: String,
    pub isbn: String,
}

impl Book {
    #[must_use]
    pub fn new(id: i64, title: String, year: i32, author: String, isbn: String) -> Self {
        Self {
            info: MediaInfo::new(id, title, year),
            author,
            isbn,
        }
    }

    #[must_use]
    pub fn id(&self) -> i64 {
        self.info.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.info.title
    }

    #[must_use]
    pub fn year(&self) -> i32 {
        self.info.year
    }

    /// Human-readable rendering of all fields, one line.
    #[must_use]
    pub fn display_details(&self) -> String {
        format!(
            "Livre - Titre: {}, Auteur: {}, ISBN: {}, Année: {}",
            self.info.title, self.author, self.isbn, self.info.year
        )
    }
}

/// A periodical.
#[derive(Debug, Clone, Serialize)]
pub struct Magazine {
    #[serde(flatten)]
    info: MediaInfo,
    pub publisher: String,
    /// Free-form label, e.g. "Mensuel".
    pub periodicity: String,
}

impl Magazine {
    #[must_use]
    pub fn new(id: i64, title: String, year: i32, publisher: String, periodicity: String) -> Self {
        Self {
            info: MediaInfo::new(id, title, year),
            publisher,
            periodicity,
        }
    }

    #[must_use]
    pub fn id(&self) -> i64 {
        self.info.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.info.title
    }

    #[must_use]
    pub fn year(&self) -> i32 {
        self.info.year
    }

    #[must_use]
    pub fn display_details(&self) -> String {
        format!(
            "Magazine - Titre: {}, Éditeur: {}, Périodicité: {}, Année: {}",
            self.info.title, self.publisher, self.periodicity, self.info.year
        )
    }
}

/// A film on disc.
#[derive(Debug, Clone, Serialize)]
pub struct Dvd {
    #[serde(flatten)]
    info: MediaInfo,
    pub director: String,
    pub duration_minutes: u32,
}

impl Dvd {
    #[must_use]
    pub fn new(id: i64, title: String, year: i32, director: String, duration_minutes: u32) -> Self {
        Self {
            info: MediaInfo::new(id, title, year),
            director,
            duration_minutes,
        }
    }

    #[must_use]
    pub fn id(&self) -> i64 {
        self.info.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.info.title
    }

    #[must_use]
    pub fn year(&self) -> i32 {
        self.info.year
    }

    #[must_use]
    pub fn display_details(&self) -> String {
        format!(
            "DVD - Titre: {}, Réalisateur: {}, Durée: {} min, Année: {}",
            self.info.title, self.director, self.duration_minutes, self.info.year
        )
    }
}

/// The downloadable capability: file size and format of a digital copy.
///
/// Plain data, not an entity on its own; it does not touch the creation
/// counter.
#[derive(Debug, Clone, Serialize)]
pub struct Downloadable {
    pub file_size_mb: f64,
    pub file_format: String,
}

impl Downloadable {
    /// Rendering of the capability fields, two lines.
    #[must_use]
    pub fn display_details(&self) -> String {
        format!(
            "Taille du fichier: {} Mo\nFormat du fichier: {}",
            self.file_size_mb, self.file_format
        )
    }
}

/// A book that also carries a downloadable capability.
///
/// Composition, not inheritance: the digital book owns a full [`Book`]
/// and a [`Downloadable`]. Its inner book is constructed through the
/// shared base path, so a digital book increments the creation counter
/// once, never twice.
#[derive(Debug, Clone, Serialize)]
pub struct DigitalBook {
    #[serde(flatten)]
    pub book: Book,
    #[serde(flatten)]
    pub download: Downloadable,
}

impl DigitalBook {
    #[must_use]
    pub fn new(
        id: i64,
        title: String,
        year: i32,
        author: String,
        isbn: String,
        file_size_mb: f64,
        file_format: String,
    ) -> Self {
        Self {
            book: Book::new(id, title, year, author, isbn),
            download: Downloadable {
                file_size_mb,
                file_format,
            },
        }
    }

    #[must_use]
    pub fn id(&self) -> i64 {
        self.book.id()
    }

    #[must_use]
    pub fn title(&self) -> &str {
        self.book.title()
    }

    #[must_use]
    pub fn year(&self) -> i32 {
        self.book.year()
    }

    /// The book rendering followed by the downloadable rendering, in that
    /// order. The two segments stay separate lines; they are never fused
    /// into a single format string.
    #[must_use]
    pub fn display_details(&self) -> String {
        format!(
            "{}\n{}",
            self.book.display_details(),
            self.download.display_details()
        )
    }
}

/// A catalog entity: one of the four concrete variants.
///
/// The abstract base is not a constructible thing; only variants exist.
/// Serialization is untagged so an exported record carries exactly the
/// entity's stored field set and nothing else.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Media {
    Book(Book),
    Magazine(Magazine),
    Dvd(Dvd),
    DigitalBook(DigitalBook),
}

impl Media {
    #[must_use]
    pub fn id(&self) -> i64 {
        match self {
            Self::Book(b) => b.id(),
            Self::Magazine(m) => m.id(),
            Self::Dvd(d) => d.id(),
            Self::DigitalBook(n) => n.id(),
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::Book(b) => b.title(),
            Self::Magazine(m) => m.title(),
            Self::Dvd(d) => d.title(),
            Self::DigitalBook(n) => n.title(),
        }
    }

    #[must_use]
    pub fn year(&self) -> i32 {
        match self {
            Self::Book(b) => b.year(),
            Self::Magazine(m) => m.year(),
            Self::Dvd(d) => d.year(),
            Self::DigitalBook(n) => n.year(),
        }
    }

    /// The discriminator token for this variant, as it appears in
    /// imported rows.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Book(_) => "Livre",
            Self::Magazine(_) => "Magazine",
            Self::Dvd(_) => "DVD",
            Self::DigitalBook(_) => "LivreNumerique",
        }
    }

    #[must_use]
    pub fn display_details(&self) -> String {
        match self {
            Self::Book(b) => b.display_details(),
            Self::Magazine(m) => m.display_details(),
            Self::Dvd(d) => d.display_details(),
            Self::DigitalBook(n) => n.display_details(),
        }
    }
}

/// Id-only equality. Titles, years, and variants are deliberately not
/// compared: a book and a DVD sharing an id are equal.
impl PartialEq for Media {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for Media {}

impl fmt::Display for Media {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_details())
    }
}

impl From<Book> for Media {
    fn from(book: Book) -> Self {
        Self::Book(book)
    }
}

impl From<Magazine> for Media {
    fn from(magazine: Magazine) -> Self {
        Self::Magazine(magazine)
    }
}

impl From<Dvd> for Media {
    fn from(dvd: Dvd) -> Self {
        Self::Dvd(dvd)
    }
}

impl From<DigitalBook> for Media {
    fn from(book: DigitalBook) -> Self {
        Self::DigitalBook(book)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_fields_and_display() {
        let book = Book::new(
            1,
            "Python 101".to_string(),
            2023,
            "Alice".to_string(),
            "12345".to_string(),
        );

        assert_eq!(book.id(), 1);
        assert_eq!(book.title(), "Python 101");
        assert_eq!(book.year(), 2023);
        assert_eq!(
            book.display_details(),
            "Livre - Titre: Python 101, Auteur: Alice, ISBN: 12345, Année: 2023"
        );
    }

    #[test]
    fn test_magazine_display() {
        let magazine = Magazine::new(
            2,
            "Tech Today".to_string(),
            2023,
            "TechPublisher".to_string(),
            "Mensuel".to_string(),
        );

        assert_eq!(
            magazine.display_details(),
            "Magazine - Titre: Tech Today, Éditeur: TechPublisher, Périodicité: Mensuel, Année: 2023"
        );
    }

    #[test]
    fn test_dvd_display() {
        let dvd = Dvd::new(3, "Inception".to_string(), 2010, "Nolan".to_string(), 148);

        assert_eq!(
            dvd.display_details(),
            "DVD - Titre: Inception, Réalisateur: Nolan, Durée: 148 min, Année: 2010"
        );
    }

    #[test]
    fn test_digital_book_display_is_book_then_download() {
        let digital = DigitalBook::new(
            4,
            "D".to_string(),
            2023,
            "A".to_string(),
            "54321".to_string(),
            10.5,
            "pdf".to_string(),
        );

        let details = digital.display_details();
        let book_at = details.find("Auteur: A, ISBN: 54321").unwrap();
        let size_at = details.find("Taille du fichier: 10.5 Mo").unwrap();
        let format_at = details.find("Format du fichier: pdf").unwrap();
        assert!(book_at < size_at);
        assert!(size_at < format_at);
    }

    #[test]
    fn test_equality_is_id_only() {
        let book = Media::from(Book::new(
            1,
            "A".to_string(),
            2000,
            "X".to_string(),
            "1".to_string(),
        ));
        let dvd = Media::from(Dvd::new(1, "B".to_string(), 2010, "Y".to_string(), 90));
        let other = Media::from(Dvd::new(2, "B".to_string(), 2010, "Y".to_string(), 90));

        assert_eq!(book, dvd);
        assert_ne!(book, other);
    }

    #[test]
    fn test_kind_tokens() {
        let magazine = Media::from(Magazine::new(
            2,
            "T".to_string(),
            2021,
            "P".to_string(),
            "Mensuel".to_string(),
        ));
        assert_eq!(magazine.kind(), "Magazine");
    }

    #[test]
    fn test_book_record_shape() {
        let book = Media::from(Book::new(
            1,
            "Titre é".to_string(),
            2020,
            "John Doe".to_string(),
            "123-456-789".to_string(),
        ));

        let value = serde_json::to_value(&book).unwrap();
        let record = value.as_object().unwrap();
        assert_eq!(record.len(), 5);
        assert_eq!(record["id"], 1);
        assert_eq!(record["title"], "Titre é");
        assert_eq!(record["year"], 2020);
        assert_eq!(record["author"], "John Doe");
        assert_eq!(record["isbn"], "123-456-789");
    }

    #[test]
    fn test_digital_book_record_carries_both_field_sets() {
        let digital = Media::from(DigitalBook::new(
            4,
            "Apprendre Python".to_string(),
            2019,
            "Jane Doe".to_string(),
            "987-654-321".to_string(),
            2.5,
            "PDF".to_string(),
        ));

        let value = serde_json::to_value(&digital).unwrap();
        let record = value.as_object().unwrap();
        assert_eq!(record.len(), 7);
        for key in [
            "id",
            "title",
            "year",
            "author",
            "isbn",
            "file_size_mb",
            "file_format",
        ] {
            assert!(record.contains_key(key), "missing key {key}");
        }
    }
}
