//! Canned queries and the read-only guard for free-form query text.

use std::fmt;

use crate::error::{Error, Result};

/// Ten most recent movie titles.
pub const SIMPLE_QUERY: &str =
  "SELECT Title, release_year FROM Movie ORDER BY release_year DESC LIMIT 10";

/// Rating whose movies [`COMPLEX_QUERY`] lists.
pub const COMPLEX_QUERY_RATING: &str = "PG-13";

/// Movie titles with their rating and country, restricted to
/// [`COMPLEX_QUERY_RATING`].
pub const COMPLEX_QUERY: &str = "SELECT M.Title, R.rating_name, C.country_name
FROM Movie AS M
INNER JOIN Rating AS R ON M.rating_id = R.rating_id
INNER JOIN Country AS C ON M.country_id = C.country_id
WHERE R.rating_name = 'PG-13'
ORDER BY C.country_name, M.Title";

const SELECT: &str = "SELECT";

/// Caller-supplied query text that passed the read-only guard.
///
/// The only way to build one is [`SelectStatement::parse`], so holding a
/// `SelectStatement` means the text starts with `SELECT`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectStatement(String);

impl SelectStatement {
  /// Accept `text` if, once trimmed, it begins with `SELECT` in any case.
  pub fn parse(text: &str) -> Result<Self> {
    let trimmed = text.trim();
    let is_select = trimmed
      .get(..SELECT.len())
      .is_some_and(|head| head.eq_ignore_ascii_case(SELECT));

    if is_select {
      Ok(Self(trimmed.to_owned()))
    } else {
      Err(Error::InvalidStatement(text.to_owned()))
    }
  }

  pub fn as_str(&self) -> &str { &self.0 }
}

impl fmt::Display for SelectStatement {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}
