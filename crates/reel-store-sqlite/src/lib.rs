//! SQLite backend for the Reel movie catalog.
//!
//! [`MovieStore`] holds only the path of the database file. Every operation
//! opens its own [`rusqlite::Connection`], runs to completion and drops it
//! before returning, on success and error paths alike.

mod cursor;
mod loader;
mod schema;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::MovieStore;
