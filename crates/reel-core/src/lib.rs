//! Core types for the Reel movie catalog.
//!
//! This crate knows nothing about SQLite. It describes the shape of every
//! source file, translates delimited lines into records, guards free-form
//! queries and renders arbitrary result sets as fixed-width text tables.
//! The storage backend (`reel-store-sqlite`) builds on top of it.

pub mod error;
pub mod query;
pub mod record;
pub mod render;
pub mod report;
pub mod shape;

pub use error::{Error, Result};
