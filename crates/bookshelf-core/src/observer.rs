//! Change observation

use bookshelf_api::LibraryEvent;

/// Receives a notification after every successful load, add and remove
pub trait LibraryObserver {
    fn on_change(&self, event: &LibraryEvent);
}

impl<F> LibraryObserver for F
where
    F: Fn(&LibraryEvent),
{
    fn on_change(&self, event: &LibraryEvent) {
        self(event)
    }
}
