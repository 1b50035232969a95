//! The library: the ordered book list and everything done to it

use bookshelf_api::{
    Book, Genre, LibraryEvent, LibraryStats, NewBook, SearchField, SearchHit, SyncStatus,
};
use bookshelf_config::Catalog;
use bookshelf_store::BookStore;
use bookshelf_util::BookId;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::{LibraryError, LibraryObserver, LibraryResult, compute_stats};

/// Result of a successful add
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Added {
    pub index: usize,
    pub id: BookId,
    pub sync: SyncStatus,
}

/// Result of a successful remove
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Removed {
    /// Position the book had before removal
    pub index: usize,
    pub book: Book,
    pub sync: SyncStatus,
}

/// The single user's book list.
///
/// Insertion order is the only order. Every mutation is written through to
/// the store; if that write fails the in-memory list stays authoritative
/// and [`Library::is_synced`] reports `false` until a later save succeeds.
pub struct Library {
    books: Vec<Book>,
    store: Arc<dyn BookStore>,
    catalog: Catalog,
    observers: Vec<Box<dyn LibraryObserver>>,
    synced: bool,
}

impl fmt::Debug for Library {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Library")
            .field("books", &self.books)
            .field("store", &self.store.describe())
            .field("catalog", &self.catalog)
            .field("observers_count", &self.observers.len())
            .field("synced", &self.synced)
            .finish()
    }
}

impl Library {
    /// Create an empty library backed by `store`. Call [`Library::load`] to
    /// hydrate it.
    pub fn new(store: Arc<dyn BookStore>, catalog: Catalog) -> Self {
        Self {
            books: Vec::new(),
            store,
            catalog,
            observers: Vec::new(),
            synced: true,
        }
    }

    /// Register an observer for change notifications
    pub fn subscribe(&mut self, observer: impl LibraryObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    fn notify(&self, event: LibraryEvent) {
        debug!(event = event.kind(), observers = self.observers.len(), "Notifying observers");
        for observer in &self.observers {
            observer.on_change(&event);
        }
    }

    /// Replace the in-memory list with the persisted one.
    ///
    /// Nothing persisted yet leaves an empty library. On a read or parse
    /// failure the current list is kept and the error returned.
    pub fn load(&mut self) -> LibraryResult<usize> {
        match self.store.load() {
            Ok(Some(books)) => self.books = books,
            Ok(None) => self.books.clear(),
            Err(e) => {
                warn!(store = %self.store.describe(), error = %e, "Failed to load library");
                return Err(LibraryError::PersistenceRead(e));
            }
        }

        self.synced = true;
        let count = self.books.len();
        info!(store = %self.store.describe(), count, "Library loaded");

        self.notify(LibraryEvent::Loaded { count });
        Ok(count)
    }

    /// Write the whole list to the store
    pub fn save(&mut self) -> LibraryResult<()> {
        match self.store.save(&self.books) {
            Ok(()) => {
                self.synced = true;
                Ok(())
            }
            Err(e) => {
                self.synced = false;
                warn!(store = %self.store.describe(), error = %e, "Failed to save library");
                Err(LibraryError::PersistenceWrite(e))
            }
        }
    }

    fn write_through(&mut self) -> SyncStatus {
        match self.save() {
            Ok(()) => SyncStatus::Saved,
            Err(e) => SyncStatus::Unsaved {
                reason: e.to_string(),
            },
        }
    }

    /// Validate and append a book, then persist.
    ///
    /// `added_date` is stamped here. Invalid input changes nothing.
    pub fn add(&mut self, new_book: NewBook) -> LibraryResult<Added> {
        let checked = self.catalog.check(&new_book).map_err(|errors| {
            warn!(title = %new_book.title, errors = errors.len(), "Rejected new book");
            LibraryError::Validation(errors)
        })?;

        let book = Book {
            id: BookId::new(),
            title: checked.title,
            author: checked.author,
            publication_year: checked.publication_year,
            genre: Genre::new(checked.genre),
            read_status: checked.read_status,
            added_date: bookshelf_util::timestamp_now(),
        };

        let id = book.id;
        let title = book.title.clone();
        self.books.push(book);
        let index = self.books.len() - 1;

        let sync = self.write_through();
        info!(index, id = %id, title = %title, saved = sync.is_saved(), "Book added");

        self.notify(LibraryEvent::BookAdded { index, id, title });
        Ok(Added { index, id, sync })
    }

    /// Remove the book at `index`, then persist.
    ///
    /// Returns `None` and leaves the list untouched when `index` is out of
    /// range. Positions shift after every add or remove, so an index from an
    /// earlier listing may now name a different book.
    pub fn remove(&mut self, index: usize) -> Option<Removed> {
        if index >= self.books.len() {
            debug!(index, len = self.books.len(), "Remove index out of range");
            return None;
        }

        let book = self.books.remove(index);
        let sync = self.write_through();
        info!(index, id = %book.id, title = %book.title, saved = sync.is_saved(), "Book removed");

        self.notify(LibraryEvent::BookRemoved {
            index,
            id: book.id,
            title: book.title.clone(),
        });
        Some(Removed { index, book, sync })
    }

    /// Remove a book by its stable id
    pub fn remove_by_id(&mut self, id: &BookId) -> Option<Removed> {
        match self.position_of(id) {
            Some(index) => self.remove(index),
            None => {
                debug!(id = %id, "No book with that id");
                None
            }
        }
    }

    /// Current position of a book
    pub fn position_of(&self, id: &BookId) -> Option<usize> {
        self.books.iter().position(|b| &b.id == id)
    }

    /// Books whose `field` contains `term`, ignoring case, in library order.
    ///
    /// An empty term is a substring of everything and matches every book.
    pub fn search(&self, term: &str, field: SearchField) -> Vec<Book> {
        self.search_hits(term, field)
            .into_iter()
            .map(|hit| hit.book)
            .collect()
    }

    /// Like [`Library::search`], keeping each match's current position
    pub fn search_hits(&self, term: &str, field: SearchField) -> Vec<SearchHit> {
        let needle = term.to_lowercase();
        let hits: Vec<SearchHit> = self
            .books
            .iter()
            .enumerate()
            .filter(|(_, book)| field.value_of(book).to_lowercase().contains(&needle))
            .map(|(index, book)| SearchHit {
                index,
                book: book.clone(),
            })
            .collect();

        debug!(term, field = %field, matches = hits.len(), "Search");
        hits
    }

    /// Positions of the books [`Library::search`] would return
    pub fn search_positions(&self, term: &str, field: SearchField) -> Vec<usize> {
        self.search_hits(term, field)
            .into_iter()
            .map(|hit| hit.index)
            .collect()
    }

    pub fn stats(&self) -> LibraryStats {
        compute_stats(&self.books)
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn get(&self, index: usize) -> Option<&Book> {
        self.books.get(index)
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Whether the store holds exactly the in-memory list
    pub fn is_synced(&self) -> bool {
        self.synced
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn store_location(&self) -> String {
        self.store.describe()
    }
}
