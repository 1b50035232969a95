//! Shared utilities for bookshelf
//!
//! This crate provides:
//! - ID types (BookId)
//! - Clock helpers (mockable wall-clock time, the persisted timestamp format)
//! - Default paths for config and data directories

mod ids;
mod paths;
mod time;

pub use ids::*;
pub use paths::*;
pub use time::*;
