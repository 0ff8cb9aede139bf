//! Book record and its wire format
//!
//! Wire and column names (`booktitle`, `bookauthor`, `releasedate`) are fixed
//! so existing `books.db` files and clients keep working.

use std::fmt;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::ValidationError;

/// Server-assigned book identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(i64);

impl BookId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Parse a path segment as a book id.
    ///
    /// # Example
    /// ```
    /// use bookshelf_server::models::BookId;
    ///
    /// assert_eq!(BookId::parse("42").unwrap().get(), 42);
    /// assert!(BookId::parse("abc").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        s.parse::<i64>()
            .map(Self)
            .map_err(|_| ValidationError::InvalidId {
                value: s.to_owned(),
            })
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A stored book
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Book {
    pub id: i64,

    #[serde(rename = "booktitle")]
    #[sqlx(rename = "booktitle")]
    pub title: String,

    /// Stored as a bare integer; ISBN-10 check digit `X` cannot be represented.
    pub isbn: i64,

    #[serde(rename = "bookauthor")]
    #[sqlx(rename = "bookauthor")]
    pub author: String,

    #[serde(rename = "releasedate")]
    #[sqlx(rename = "releasedate")]
    pub release_date: i64,
}

impl Book {
    pub fn id(&self) -> BookId {
        BookId(self.id)
    }

    /// Split into target id and data fields.
    pub fn into_parts(self) -> (BookId, BookFields) {
        (
            BookId(self.id),
            BookFields {
                title: self.title,
                isbn: self.isbn,
                author: self.author,
                release_date: self.release_date,
            },
        )
    }
}

/// Book data without an id (create and update payloads).
///
/// An `id` key in the JSON body is accepted and ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookFields {
    #[serde(rename = "booktitle")]
    pub title: String,

    pub isbn: i64,

    #[serde(rename = "bookauthor")]
    pub author: String,

    #[serde(rename = "releasedate")]
    pub release_date: i64,
}

impl BookFields {
    /// Attach an id, producing the full record.
    pub fn with_id(self, id: BookId) -> Book {
        Book {
            id: id.0,
            title: self.title,
            isbn: self.isbn,
            author: self.author,
            release_date: self.release_date,
        }
    }
}
