//! Change notifications emitted by the library

use bookshelf_util::BookId;
use serde::{Deserialize, Serialize};

/// Emitted after a successful mutation or load so the shell can redraw
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LibraryEvent {
    /// The persisted library replaced the in-memory one
    Loaded { count: usize },

    /// A book was appended
    BookAdded {
        index: usize,
        id: BookId,
        title: String,
    },

    /// A book was removed; later books shifted down by one
    BookRemoved {
        index: usize,
        id: BookId,
        title: String,
    },
}

impl LibraryEvent {
    /// Short name for logs
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Loaded { .. } => "loaded",
            Self::BookAdded { .. } => "book_added",
            Self::BookRemoved { .. } => "book_removed",
        }
    }
}
