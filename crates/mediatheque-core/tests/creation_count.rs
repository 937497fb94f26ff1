//! Creation-counter semantics.
//!
//! Kept as a single test in its own binary: the counter is process-wide,
//! and any other test constructing entities in the same process would
//! skew the deltas asserted here.

use mediatheque_core::{Book, DigitalBook, Dvd, Magazine, total_count};

#[test]
fn counts_every_construction_exactly_once() {
    let start = total_count();

    let _book = Book::new(
        1,
        "Python 101".to_string(),
        2023,
        "Alice".to_string(),
        "12345".to_string(),
    );
    assert_eq!(total_count(), start + 1);

    let _magazine = Magazine::new(
        2,
        "Tech Today".to_string(),
        2023,
        "TechPublisher".to_string(),
        "Mensuel".to_string(),
    );
    let _dvd = Dvd::new(3, "Python Basics".to_string(), 2021, "John".to_string(), 120);
    assert_eq!(total_count(), start + 3);

    // A digital book funnels through the base path once, never twice.
    let digital = DigitalBook::new(
        4,
        "Digital Python".to_string(),
        2023,
        "Alice".to_string(),
        "54321".to_string(),
        10.5,
        "pdf".to_string(),
    );
    assert_eq!(total_count(), start + 4);

    // Dropping an entity does not decrement: creations, not live instances.
    drop(digital);
    assert_eq!(total_count(), start + 4);

    // Cloning is not a construction either; clones copy an already
    // constructed base.
    let book2 = Book::new(
        5,
        "Encore".to_string(),
        2024,
        "Bob".to_string(),
        "99".to_string(),
    );
    let before_clone = total_count();
    let _copy = book2.clone();
    assert_eq!(total_count(), before_clone);
}
