//! [`RowCursor`] over a live `rusqlite` statement.

use reel_core::render::{Row, RowCursor};
use rusqlite::{Rows, Statement, types::ValueRef};

use crate::Error;

pub(crate) struct SqliteCursor<'stmt> {
  columns: Vec<String>,
  rows:    Rows<'stmt>,
}

impl<'stmt> SqliteCursor<'stmt> {
  /// Start executing `stmt`. Rows are fetched lazily by
  /// [`next_row`](RowCursor::next_row).
  pub(crate) fn new(stmt: &'stmt mut Statement<'_>) -> rusqlite::Result<Self> {
    let columns = stmt
      .column_names()
      .into_iter()
      .map(str::to_owned)
      .collect();
    let rows = stmt.query([])?;
    Ok(Self { columns, rows })
  }
}

impl RowCursor for SqliteCursor<'_> {
  type Error = Error;

  fn columns(&self) -> &[String] { &self.columns }

  fn next_row(&mut self) -> Result<Option<Row>, Error> {
    let Some(row) = self.rows.next()? else {
      return Ok(None);
    };

    let cells = (0..self.columns.len())
      .map(|i| row.get_ref(i).map(display_value))
      .collect::<rusqlite::Result<Row>>()?;
    Ok(Some(cells))
  }
}

/// Text form of a stored value, as SQLite itself would print it.
fn display_value(value: ValueRef<'_>) -> Option<String> {
  match value {
    ValueRef::Null => None,
    ValueRef::Integer(i) => Some(i.to_string()),
    ValueRef::Real(f) => Some(real_text(f)),
    ValueRef::Text(t) | ValueRef::Blob(t) => Some(String::from_utf8_lossy(t).into_owned()),
  }
}

/// Significant digits SQLite keeps when it turns a REAL into text.
const REAL_DIGITS: i32 = 15;

/// `printf("%!.15g")` as SQLite's printf implements it: 15 significant
/// digits, exponent form outside `1e-4..1e15`, trailing zeros dropped but
/// always at least one digit after the point.
fn real_text(f: f64) -> String {
  if f.is_infinite() {
    return if f < 0.0 { "-Inf" } else { "Inf" }.to_owned();
  }
  if f.is_nan() {
    return "NaN".to_owned();
  }

  let scientific = format!("{:.*e}", (REAL_DIGITS - 1) as usize, f);
  let (mantissa, exp) = scientific
    .split_once('e')
    .and_then(|(m, e)| Some((m, e.parse::<i32>().ok()?)))
    .unwrap_or((scientific.as_str(), 0));

  if exp < -4 || exp >= REAL_DIGITS {
    let sign = if exp < 0 { '-' } else { '+' };
    format!("{}e{sign}{:02}", trim_fraction(mantissa), exp.abs())
  } else {
    let fixed = format!("{:.*}", (REAL_DIGITS - 1 - exp) as usize, f);
    trim_fraction(&fixed)
  }
}

fn trim_fraction(digits: &str) -> String {
  match digits.split_once('.') {
    Some((whole, fraction)) => {
      let fraction = fraction.trim_end_matches('0');
      let fraction = if fraction.is_empty() { "0" } else { fraction };
      format!("{whole}.{fraction}")
    }
    None => format!("{digits}.0"),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn reals_print_like_sqlite() {
    assert_eq!(real_text(2.0), "2.0");
    assert_eq!(real_text(1.5), "1.5");
    assert_eq!(real_text(0.1), "0.1");
    assert_eq!(real_text(-3.25), "-3.25");
    assert_eq!(real_text(1e20), "1.0e+20");
    assert_eq!(real_text(1.5e-7), "1.5e-07");
    assert_eq!(real_text(123456789012345.0), "123456789012345.0");
    assert_eq!(real_text(1234567890123456.0), "1.23456789012346e+15");
    assert_eq!(real_text(0.0001), "0.0001");
    assert_eq!(real_text(1.0 / 3.0), "0.333333333333333");
  }
}
