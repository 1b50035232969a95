//! Requests from the presentation shell and the library's replies

use bookshelf_util::BookId;
use serde::{Deserialize, Serialize};

use crate::{Book, LibraryStats, NewBook, SearchField, SearchHit, SyncStatus};

/// Everything the shell can ask of the library
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    /// Re-read the persisted library
    Load,

    /// List all books in order
    List,

    /// Add a book from a submitted form
    Add(NewBook),

    /// Remove the book at a position
    Remove { index: usize },

    /// Remove a book by its stable id
    RemoveById { id: BookId },

    /// Case-insensitive substring search
    Search { term: String, field: SearchField },

    /// Compute statistics
    Stats,
}

/// Reply to a [`Command`]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Response {
    Loaded { count: usize },
    Books { books: Vec<Book> },
    Added { index: usize, id: BookId, sync: SyncStatus },
    Removed { index: usize, book: Book, sync: SyncStatus },
    /// No book at that index or with that id; nothing changed
    NotRemoved,
    SearchResults { hits: Vec<SearchHit> },
    Stats(LibraryStats),
    Error(ErrorInfo),
}

/// Error information
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    pub code: ErrorCode,
    pub message: String,
}

impl ErrorInfo {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    ValidationFailed,
    PersistenceRead,
    PersistenceWrite,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_serialization() {
        let cmd = Command::Search {
            term: "dune".into(),
            field: SearchField::Title,
        };
        let json = serde_json::to_string(&cmd).unwrap();
        assert!(json.contains("\"type\":\"search\""));
        assert!(json.contains("\"field\":\"title\""));

        let parsed: Command = serde_json::from_str(&json).unwrap();
        assert!(matches!(parsed, Command::Search { field: SearchField::Title, .. }));
    }

    #[test]
    fn error_response_serialization() {
        let resp = Response::Error(ErrorInfo::new(ErrorCode::ValidationFailed, "title is empty"));
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("validation_failed"));
    }
}
