//! In-memory store, for tests and dry runs

use bookshelf_api::Book;
use std::io;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tracing::debug;

use crate::{BookStore, StoreError, StoreResult};

/// Keeps the "persisted" sequence in memory. Reads and writes can be made to
/// fail on demand.
#[derive(Debug, Default)]
pub struct MemoryStore {
    books: Mutex<Option<Vec<Book>>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
    saves: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `books`
    pub fn with_books(books: Vec<Book>) -> Self {
        Self {
            books: Mutex::new(Some(books)),
            ..Self::default()
        }
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// What a load would return right now, ignoring injected failures
    pub fn persisted(&self) -> Option<Vec<Book>> {
        self.books.lock().ok().and_then(|b| b.clone())
    }

    /// Number of successful saves
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

impl BookStore for MemoryStore {
    fn load(&self) -> StoreResult<Option<Vec<Book>>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StoreError::Serialization("injected read failure".into()));
        }

        let books = self
            .books
            .lock()
            .map_err(|_| StoreError::Unavailable("memory store lock poisoned".into()))?;
        Ok(books.clone())
    }

    fn save(&self, books: &[Book]) -> StoreResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Io(io::Error::other("injected write failure")));
        }

        let mut stored = self
            .books
            .lock()
            .map_err(|_| StoreError::Unavailable("memory store lock poisoned".into()))?;
        *stored = Some(books.to_vec());
        self.saves.fetch_add(1, Ordering::SeqCst);

        debug!(count = books.len(), "Memory store saved");
        Ok(())
    }

    fn describe(&self) -> String {
        "in-memory store".to_string()
    }
}
