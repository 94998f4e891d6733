//! Bulk loading: source lines → records → parameterized inserts.
//!
//! Per-line failures never abort a source. Lines that do not fit the shape
//! are skipped, constraint violations are counted quietly, and any other
//! insert error is counted and logged with the offending statement.

use std::io::BufRead;

use reel_core::{
  record::{Record, translate},
  report::LoadCounts,
  shape::{FieldKind, TableShape},
};
use rusqlite::{Connection, types::Value};
use tracing::{error, trace};

use crate::error::is_constraint_violation;

pub(crate) fn load_records<R: BufRead>(
  conn: &Connection,
  source: R,
  shape: &TableShape,
) -> LoadCounts {
  let sql = shape.insert_sql();
  let mut counts = LoadCounts::default();

  for (index, line) in source.split(b'\n').enumerate() {
    let line = match line {
      Ok(line) => line,
      Err(e) => {
        error!(table = shape.table, line = index + 1, "read error, stopping: {e}");
        break;
      }
    };
    let line = String::from_utf8_lossy(&line);

    let record = match translate(&line, shape) {
      Ok(record) => record,
      Err(e) => {
        trace!(line = index + 1, "skipping: {e}");
        counts.skipped += 1;
        continue;
      }
    };

    match insert(conn, &sql, &record) {
      Ok(()) => counts.succeeded += 1,
      Err(e) if is_constraint_violation(&e) => {
        trace!(table = shape.table, line = index + 1, "rejected: {e}");
        counts.failed += 1;
      }
      Err(e) => {
        error!(
          values = ?record.values(),
          "SQL error on INSERT into {}: {e} (Query: {sql})",
          shape.table
        );
        counts.failed += 1;
      }
    }
  }

  counts
}

fn insert(conn: &Connection, sql: &str, record: &Record) -> rusqlite::Result<()> {
  let mut stmt = conn.prepare_cached(sql)?;
  stmt.execute(rusqlite::params_from_iter(record.fields().map(
    |(field, raw)| bind_value(field.kind, raw),
  )))?;
  Ok(())
}

/// Integer fields that parse are bound as integers; everything else is
/// bound as text and left to the column's affinity and constraints.
fn bind_value(kind: FieldKind, raw: &str) -> Value {
  match kind {
    FieldKind::Integer => raw
      .parse::<i64>()
      .map(Value::Integer)
      .unwrap_or_else(|_| Value::Text(raw.to_owned())),
    FieldKind::Text => Value::Text(raw.to_owned()),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn integers_bind_as_integers_when_they_parse() {
    assert_eq!(bind_value(FieldKind::Integer, "1999"), Value::Integer(1999));
    assert_eq!(
      bind_value(FieldKind::Integer, "n/a"),
      Value::Text("n/a".into())
    );
    assert_eq!(bind_value(FieldKind::Text, "42"), Value::Text("42".into()));
  }
}
