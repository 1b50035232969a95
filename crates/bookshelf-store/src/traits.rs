//! Store trait definitions

use bookshelf_api::Book;

use crate::StoreResult;

/// Persistent home of the book list
pub trait BookStore: Send + Sync {
    /// Read the whole persisted sequence.
    ///
    /// Returns `Ok(None)` when nothing has been persisted yet.
    fn load(&self) -> StoreResult<Option<Vec<Book>>>;

    /// Replace the persisted sequence with `books`
    fn save(&self, books: &[Book]) -> StoreResult<()>;

    /// Human-readable location, for logs and status lines
    fn describe(&self) -> String;
}
