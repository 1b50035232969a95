//! Book records and related value types

use bookshelf_util::BookId;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Genres offered when no configuration overrides them
pub const DEFAULT_GENRES: [&str; 12] = [
    "Fiction",
    "Non-Fiction",
    "Science",
    "Technology",
    "Fantasy",
    "Romance",
    "Poetry",
    "Self-Help",
    "Art",
    "Religion",
    "History",
    "Other",
];

/// Lowest publication year accepted by default
pub const DEFAULT_MIN_YEAR: i32 = 1000;

/// A genre label. Which labels are allowed is decided by the catalog
/// configuration, so this is an open string rather than an enum.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Genre(String);

impl Genre {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Genre {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// One tracked book
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Stable identifier. Files written without one get a fresh id on load.
    #[serde(default)]
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub publication_year: i32,
    pub genre: Genre,
    pub read_status: bool,
    /// Set once at creation
    #[serde(with = "bookshelf_util::timestamp_format")]
    pub added_date: NaiveDateTime,
}

impl Book {
    pub fn status_label(&self) -> &'static str {
        if self.read_status { "Read" } else { "Unread" }
    }

    /// Decade of publication, e.g. 1960 for 1965
    pub fn decade(&self) -> i32 {
        self.publication_year.div_euclid(10) * 10
    }
}

/// Input for adding a book, before validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub publication_year: i32,
    pub genre: String,
    pub read_status: bool,
}

impl NewBook {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        publication_year: i32,
        genre: impl Into<String>,
        read_status: bool,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            publication_year,
            genre: genre.into(),
            read_status,
        }
    }
}

/// Field a search runs against
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchField {
    #[default]
    Title,
    Author,
    Genre,
}

impl SearchField {
    pub const ALL: [SearchField; 3] = [Self::Title, Self::Author, Self::Genre];

    /// The text of this field on a book
    pub fn value_of<'a>(&self, book: &'a Book) -> &'a str {
        match self {
            Self::Title => &book.title,
            Self::Author => &book.author,
            Self::Genre => book.genre.as_str(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Author => "author",
            Self::Genre => "genre",
        }
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown search field '{0}' (expected title, author or genre)")]
pub struct UnknownSearchField(pub String);

impl FromStr for SearchField {
    type Err = UnknownSearchField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "title" => Ok(Self::Title),
            "author" => Ok(Self::Author),
            "genre" => Ok(Self::Genre),
            other => Err(UnknownSearchField(other.to_string())),
        }
    }
}

/// A search match together with its current position in the library
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    pub index: usize,
    pub book: Book,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorCount {
    pub author: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenreCount {
    pub genre: Genre,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecadeCount {
    pub decade: i32,
    pub count: usize,
}

/// Aggregate statistics over the library
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LibraryStats {
    pub total: usize,
    pub read: usize,
    pub unread: usize,
    /// Share of read books in percent, rounded to one decimal. 0 for an empty library.
    pub percentage_read: f64,
    /// Most frequent first; ties keep first-seen order
    pub authors: Vec<AuthorCount>,
    /// Most frequent first; ties keep first-seen order
    pub genres: Vec<GenreCount>,
    /// Ascending by decade
    pub decades: Vec<DecadeCount>,
}

impl LibraryStats {
    /// The `n` most frequent authors
    pub fn top_authors(&self, n: usize) -> &[AuthorCount] {
        &self.authors[..n.min(self.authors.len())]
    }
}

/// Whether the last mutation reached disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SyncStatus {
    Saved,
    Unsaved { reason: String },
}

impl SyncStatus {
    pub fn is_saved(&self) -> bool {
        matches!(self, Self::Saved)
    }
}
