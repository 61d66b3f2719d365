//! Domain models for the bookshelf. `Book` doubles as the serialized record
//! format, so the serde attributes here define the persisted layout: a JSON
//! array of `{ id, title, author, year, isComplete }` objects.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Identifier of a book. Ids are millisecond timestamps taken at creation.
///
/// Every boundary (forms, key handlers, store calls) converts to `BookId`
/// before lookups happen, so a textual id and its numeric value always match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(i64);

impl BookId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Generate an id from the current wall-clock time in milliseconds.
    ///
    /// Two books created within the same millisecond receive the same id.
    /// Lookups treat the first match as authoritative.
    pub fn generate() -> Self {
        Self(Utc::now().timestamp_millis())
    }

    pub fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BookId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<i64>().map(Self)
    }
}

impl From<i64> for BookId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// A single book on the shelf.
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    /// Publication year as typed by the user. No range validation.
    pub year: i32,
    /// Whether the book has been read to the end. Decides which shelf the
    /// book is drawn on.
    pub is_complete: bool,
}

impl Book {
    /// Build a book with a freshly generated id.
    pub fn new(title: &str, author: &str, year: i32, is_complete: bool) -> Self {
        Self {
            id: BookId::generate(),
            title: title.to_string(),
            author: author.to_string(),
            year,
            is_complete,
        }
    }

    /// Case-insensitive substring match against the title. Author and year
    /// never participate.
    pub fn title_matches(&self, query: &str) -> bool {
        self.title
            .to_lowercase()
            .contains(&query.to_lowercase())
    }
}

/// Keep the books whose title contains `query`. A blank query keeps
/// everything.
pub fn filter_by_title(books: &[Book], query: &str) -> Vec<Book> {
    if query.trim().is_empty() {
        return books.to_vec();
    }
    books
        .iter()
        .filter(|book| book.title_matches(query))
        .cloned()
        .collect()
}
