//! Shared types for bookshelf
//!
//! This crate defines the vocabulary between the library store and the
//! presentation shell:
//! - Book records and the genre/search-field vocabulary
//! - Statistics
//! - Commands (shell requests) and responses
//! - Change events

mod commands;
mod events;
mod types;

pub use commands::*;
pub use events::*;
pub use types::*;
