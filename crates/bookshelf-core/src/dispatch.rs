//! Command dispatch: the single entry point the shell talks through

use bookshelf_api::{Command, Response};

use crate::{Library, Removed};

impl Library {
    /// Run one shell command against the library
    pub fn execute(&mut self, command: Command) -> Response {
        match command {
            Command::Load => match self.load() {
                Ok(count) => Response::Loaded { count },
                Err(e) => Response::Error(e.to_error_info()),
            },
            Command::List => Response::Books {
                books: self.books().to_vec(),
            },
            Command::Add(new_book) => match self.add(new_book) {
                Ok(added) => Response::Added {
                    index: added.index,
                    id: added.id,
                    sync: added.sync,
                },
                Err(e) => Response::Error(e.to_error_info()),
            },
            Command::Remove { index } => removal_response(self.remove(index)),
            Command::RemoveById { id } => removal_response(self.remove_by_id(&id)),
            Command::Search { term, field } => Response::SearchResults {
                hits: self.search_hits(&term, field),
            },
            Command::Stats => Response::Stats(self.stats()),
        }
    }
}

fn removal_response(removed: Option<Removed>) -> Response {
    match removed {
        Some(Removed { index, book, sync }) => Response::Removed { index, book, sync },
        None => Response::NotRemoved,
    }
}
