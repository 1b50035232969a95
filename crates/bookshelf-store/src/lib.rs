//! Persistence layer for bookshelf
//!
//! Provides:
//! - The `BookStore` trait the library writes through
//! - `JsonFileStore`, the on-disk JSON library file
//! - `MemoryStore`, an in-process store for tests

mod json;
mod memory;
mod traits;

pub use json::*;
pub use memory::*;
pub use traits::*;

use thiserror::Error;

/// Store errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Serialization(e.to_string())
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
