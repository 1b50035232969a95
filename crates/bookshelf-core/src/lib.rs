//! Core of bookshelf
//!
//! This crate owns the book list:
//! - Load from and write through to a `BookStore`
//! - Add (validated against the catalog), remove by position or id
//! - Case-insensitive search and statistics
//! - Change notifications for the presentation shell

mod dispatch;
mod library;
mod observer;
mod stats;

pub use library::*;
pub use observer::*;
pub use stats::*;

use bookshelf_api::{ErrorCode, ErrorInfo};
use bookshelf_config::BookValidationError;
use bookshelf_store::StoreError;
use thiserror::Error;

/// Library errors. None of these are fatal to a session.
#[derive(Debug, Error)]
pub enum LibraryError {
    #[error("Invalid book: {}", join_errors(.0))]
    Validation(Vec<BookValidationError>),

    #[error("Could not read library: {0}")]
    PersistenceRead(#[source] StoreError),

    #[error("Could not save library: {0}")]
    PersistenceWrite(#[source] StoreError),
}

impl LibraryError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Validation(_) => ErrorCode::ValidationFailed,
            Self::PersistenceRead(_) => ErrorCode::PersistenceRead,
            Self::PersistenceWrite(_) => ErrorCode::PersistenceWrite,
        }
    }

    pub fn to_error_info(&self) -> ErrorInfo {
        ErrorInfo::new(self.code(), self.to_string())
    }
}

fn join_errors(errors: &[BookValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

pub type LibraryResult<T> = Result<T, LibraryError>;
