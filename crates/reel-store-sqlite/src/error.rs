//! Error type for `reel-store-sqlite`.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error(transparent)]
  Core(#[from] reel_core::Error),

  #[error("can't open database {}: {source}", path.display())]
  Open {
    path:   PathBuf,
    #[source]
    source: rusqlite::Error,
  },

  /// A statement in the schema batch failed; the batch was rolled back.
  #[error("SQL error during schema creation: {0}")]
  Schema(#[source] rusqlite::Error),

  #[error("could not open {}: {source}", path.display())]
  Source {
    path:   PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("SQL error: {0}")]
  Database(#[from] rusqlite::Error),

  #[error("i/o error: {0}")]
  Io(#[from] std::io::Error),
}

/// True for uniqueness and foreign-key violations, which the bulk loader
/// counts without reporting.
pub(crate) fn is_constraint_violation(e: &rusqlite::Error) -> bool {
  matches!(
    e,
    rusqlite::Error::SqliteFailure(err, _)
      if err.code == rusqlite::ErrorCode::ConstraintViolation
  )
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
