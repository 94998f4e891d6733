//! Record translation: one delimited source line → one fixed-arity record.
//!
//! Every field but the last is split strictly on [`DELIMITER`]; the last
//! field takes the remainder of the line verbatim, so only the final column
//! may contain commas. A field wrapped in a single pair of double quotes
//! has that pair removed. There is no escape processing.

use crate::{
  error::{Error, Result},
  shape::{Field, TableShape},
};

pub const DELIMITER: char = ',';

const QUOTE: char = '"';

/// A translated source line, one raw value per field of its shape.
///
/// Integer fields are carried as text; they are not validated here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
  shape:  TableShape,
  values: Vec<String>,
}

impl Record {
  pub fn shape(&self) -> &TableShape { &self.shape }

  pub fn values(&self) -> &[String] { &self.values }

  /// Pair each value with the field it belongs to.
  pub fn fields(&self) -> impl Iterator<Item = (&Field, &str)> {
    self
      .shape
      .fields
      .iter()
      .zip(self.values.iter().map(String::as_str))
  }
}

/// Translate `line` into a record of `shape`.
///
/// Fails with [`Error::MissingFields`] when the line runs out before the
/// last field. An empty trailing field counts as missing.
pub fn translate(line: &str, shape: &TableShape) -> Result<Record> {
  let line = line.strip_suffix('\n').unwrap_or(line);
  let line = line.strip_suffix('\r').unwrap_or(line);

  let arity = shape.arity();
  let raw: Vec<&str> = line.splitn(arity, DELIMITER).collect();

  let found = match raw.last() {
    Some(last) if last.is_empty() => raw.len() - 1,
    _ => raw.len(),
  };
  if found < arity {
    return Err(Error::MissingFields {
      table: shape.table,
      expected: arity,
      found,
    });
  }

  Ok(Record {
    shape:  *shape,
    values: raw.into_iter().map(strip_quotes).map(str::to_owned).collect(),
  })
}

/// Remove one surrounding pair of double quotes, if present.
pub fn strip_quotes(field: &str) -> &str {
  field
    .strip_prefix(QUOTE)
    .and_then(|s| s.strip_suffix(QUOTE))
    .unwrap_or(field)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::shape::{GENRE, MOVIE, MOVIE_ACTOR, MOVIE_GENRE};

  #[test]
  fn two_field_line() {
    let r = translate("1,Action", &GENRE).unwrap();
    assert_eq!(r.values(), ["1", "Action"]);
    assert_eq!(r.shape().table, "Genre");
  }

  #[test]
  fn last_field_keeps_embedded_commas() {
    let r = translate("7,3,Himself, uncredited", &MOVIE_ACTOR).unwrap();
    assert_eq!(r.values(), ["7", "3", "Himself, uncredited"]);
  }

  #[test]
  fn quoted_fields_are_stripped() {
    let r = translate(
      "12,\"The Matrix\",1999,\"Yes\",2,1",
      &MOVIE,
    )
    .unwrap();
    assert_eq!(r.values(), ["12", "The Matrix", "1999", "Yes", "2", "1"]);
  }

  #[test]
  fn only_one_quote_pair_is_removed() {
    assert_eq!(strip_quotes("\"\"twice\"\""), "\"twice\"");
    assert_eq!(strip_quotes("half\"quoted\""), "half\"quoted\"");
    assert_eq!(strip_quotes("\""), "\"");
    assert_eq!(strip_quotes("\"\""), "");
  }

  #[test]
  fn apostrophes_survive_untouched() {
    let r = translate("4,Schindler's List", &GENRE).unwrap();
    assert_eq!(r.values()[1], "Schindler's List");
  }

  #[test]
  fn short_line_is_a_parse_failure() {
    let err = translate("2", &GENRE).unwrap_err();
    assert!(matches!(
      err,
      Error::MissingFields { table: "Genre", expected: 2, found: 1 }
    ));
  }

  #[test]
  fn empty_trailing_field_is_missing() {
    assert!(translate("1,", &MOVIE_GENRE).is_err());
    assert!(translate("", &MOVIE_GENRE).is_err());
  }

  #[test]
  fn empty_inner_field_is_kept() {
    let r = translate("1,,2000,No,1,1", &MOVIE).unwrap();
    assert_eq!(r.values()[1], "");
  }

  #[test]
  fn line_terminators_are_not_data() {
    let r = translate("1,Drama\r\n", &GENRE).unwrap();
    assert_eq!(r.values()[1], "Drama");
  }

  #[test]
  fn integer_fields_are_not_validated() {
    let r = translate("abc,Drama", &GENRE).unwrap();
    assert_eq!(r.values()[0], "abc");
  }

  #[test]
  fn fields_pair_values_with_columns() {
    let r = translate("5,9", &MOVIE_GENRE).unwrap();
    let columns: Vec<_> = r.fields().map(|(f, v)| (f.column, v)).collect();
    assert_eq!(columns, [("Movie_id", "5"), ("Genre_id", "9")]);
  }
}
