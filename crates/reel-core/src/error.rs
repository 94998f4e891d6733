//! Error types for `reel-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// A source line ended before every field of the shape was filled.
  #[error("{table}: expected {expected} fields, found {found}")]
  MissingFields {
    table:    &'static str,
    expected: usize,
    found:    usize,
  },

  #[error("invalid or non-SELECT statement provided: {0:?}")]
  InvalidStatement(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
