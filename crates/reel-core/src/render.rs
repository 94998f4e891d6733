//! Fixed-width text rendering of result sets whose columns are only known
//! once the query has run.
//!
//! Rows are pulled one at a time from a [`RowCursor`]. The header is written
//! lazily when the first row arrives, so an empty result prints nothing.

use std::io::{self, Write};

/// Width every cell is padded to. Longer values are not truncated.
pub const COLUMN_WIDTH: usize = 20;

const CELL_SUFFIX: &str = " |";

/// Text shown for SQL `NULL`.
pub const NULL_TEXT: &str = "NULL";

/// One result row; `None` is SQL `NULL`.
pub type Row = Vec<Option<String>>;

/// A pull-based source of result rows.
pub trait RowCursor {
  type Error: From<io::Error>;

  /// Column names of the result, in order.
  fn columns(&self) -> &[String];

  /// Fetch the next row, or `None` once the result is exhausted.
  fn next_row(&mut self) -> Result<Option<Row>, Self::Error>;
}

/// Drain `cursor` into `out` as a text table and return the row count.
///
/// On a cursor error, rows already written stay written and the error is
/// returned.
pub fn render_rows<C, W>(cursor: &mut C, out: &mut W) -> Result<usize, C::Error>
where
  C: RowCursor,
  W: Write + ?Sized,
{
  let mut count = 0usize;

  while let Some(row) = cursor.next_row()? {
    if count == 0 {
      write_header(cursor.columns(), out)?;
    }
    write_cells(row.iter().map(|v| v.as_deref().unwrap_or(NULL_TEXT)), out)?;
    count += 1;
  }

  Ok(count)
}

fn write_header<W: Write + ?Sized>(columns: &[String], out: &mut W) -> io::Result<()> {
  let rule = "-".repeat(columns.len() * (COLUMN_WIDTH + CELL_SUFFIX.len()));
  writeln!(out, "{rule}")?;
  write_cells(columns.iter().map(String::as_str), out)?;
  writeln!(out, "{rule}")
}

fn write_cells<'a, W: Write + ?Sized>(
  cells: impl Iterator<Item = &'a str>,
  out: &mut W,
) -> io::Result<()> {
  for cell in cells {
    write!(out, "{cell:<COLUMN_WIDTH$}{CELL_SUFFIX}")?;
  }
  writeln!(out)
}

#[cfg(test)]
mod tests {
  use std::collections::VecDeque;

  use super::*;

  /// In-memory cursor that can be told to fail after a number of rows.
  struct VecCursor {
    columns:    Vec<String>,
    rows:       VecDeque<Row>,
    fail_after: Option<usize>,
    served:     usize,
  }

  impl VecCursor {
    fn new(columns: &[&str], rows: Vec<Row>) -> Self {
      Self {
        columns: columns.iter().map(|c| c.to_string()).collect(),
        rows: rows.into(),
        fail_after: None,
        served: 0,
      }
    }
  }

  impl RowCursor for VecCursor {
    type Error = io::Error;

    fn columns(&self) -> &[String] { &self.columns }

    fn next_row(&mut self) -> io::Result<Option<Row>> {
      if self.fail_after == Some(self.served) {
        return Err(io::Error::other("no such column: x"));
      }
      self.served += 1;
      Ok(self.rows.pop_front())
    }
  }

  fn cell(s: &str) -> Option<String> { Some(s.to_owned()) }

  fn render(cursor: &mut VecCursor) -> (usize, String) {
    let mut out = Vec::new();
    let n = render_rows(cursor, &mut out).unwrap();
    (n, String::from_utf8(out).unwrap())
  }

  #[test]
  fn empty_result_prints_nothing() {
    let mut cursor = VecCursor::new(&["Title"], vec![]);
    let (n, text) = render(&mut cursor);
    assert_eq!(n, 0);
    assert!(text.is_empty());
  }

  #[test]
  fn header_then_rows() {
    let mut cursor = VecCursor::new(
      &["Title", "release_year"],
      vec![
        vec![cell("Heat"), cell("1995")],
        vec![cell("Alien"), cell("1979")],
      ],
    );
    let (n, text) = render(&mut cursor);
    assert_eq!(n, 2);

    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "-".repeat(44));
    assert_eq!(lines[1], format!("{:<20} |{:<20} |", "Title", "release_year"));
    assert_eq!(lines[2], lines[0]);
    assert_eq!(lines[3], format!("{:<20} |{:<20} |", "Heat", "1995"));
    assert_eq!(lines[4], format!("{:<20} |{:<20} |", "Alien", "1979"));
  }

  #[test]
  fn null_renders_as_text() {
    let mut cursor = VecCursor::new(&["a", "b"], vec![vec![None, cell("x")]]);
    let (_, text) = render(&mut cursor);
    assert!(text.ends_with(&format!("{:<20} |{:<20} |\n", "NULL", "x")));
  }

  #[test]
  fn wide_values_are_not_truncated() {
    let long = "Dr. Strangelove or: How I Learned to Stop Worrying";
    let mut cursor = VecCursor::new(&["Title"], vec![vec![cell(long)]]);
    let (_, text) = render(&mut cursor);
    assert!(text.contains(&format!("{long} |")));
  }

  #[test]
  fn cursor_error_keeps_rendered_rows() {
    let mut cursor = VecCursor::new(
      &["n"],
      vec![vec![cell("1")], vec![cell("2")], vec![cell("3")]],
    );
    cursor.fail_after = Some(1);

    let mut out = Vec::new();
    let err = render_rows(&mut cursor, &mut out).unwrap_err();
    assert_eq!(err.to_string(), "no such column: x");

    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.lines().count(), 4);
    assert!(!text.contains('2'));
  }
}
