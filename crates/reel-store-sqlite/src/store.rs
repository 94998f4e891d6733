//! [`MovieStore`] — schema definition, bulk loading and queries over one
//! SQLite file.

use std::{
  fs::File,
  io::{self, BufRead, BufReader, Write},
  path::{Path, PathBuf},
};

use reel_core::{
  query::{COMPLEX_QUERY, SIMPLE_QUERY, SelectStatement},
  render::render_rows,
  report::{ImportSummary, LoadCounts, LoadOutcome, LoadReport},
  shape::{IMPORT_ORDER, TableShape},
};
use rusqlite::Connection;
use tracing::{debug, error, info};

use crate::{
  Error, Result,
  cursor::SqliteCursor,
  loader::load_records,
  schema::{CREATE_TABLES, DROP_TABLES},
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// The movie catalog stored in a single SQLite file.
///
/// No connection is kept between calls; each method opens one on entry and
/// drops it before returning.
#[derive(Debug, Clone)]
pub struct MovieStore {
  path: PathBuf,
}

impl MovieStore {
  /// Point at the database file at `path`. Nothing is opened until the
  /// first operation, and the file is created on demand.
  pub fn new(path: impl Into<PathBuf>) -> Self { Self { path: path.into() } }

  pub fn path(&self) -> &Path { &self.path }

  fn connect(&self) -> Result<Connection> {
    let open = |source: rusqlite::Error| Error::Open { path: self.path.clone(), source };

    let conn = Connection::open(&self.path).map_err(open)?;
    conn.execute_batch("PRAGMA foreign_keys = ON;").map_err(open)?;

    debug!(path = %self.path.display(), "opened store");
    Ok(conn)
  }

  // ── Schema ────────────────────────────────────────────────────────────────

  /// Drop and recreate all ten tables, leaving them empty.
  ///
  /// The whole batch runs in one transaction; on failure nothing changes and
  /// the call may simply be retried.
  pub fn define_schema(&self) -> Result<()> {
    let mut conn = self.connect()?;

    let tx = conn.transaction().map_err(Error::Schema)?;
    tx.execute_batch(DROP_TABLES).map_err(Error::Schema)?;
    tx.execute_batch(CREATE_TABLES).map_err(Error::Schema)?;
    tx.commit().map_err(Error::Schema)?;

    info!(path = %self.path.display(), "database schema created");
    Ok(())
  }

  // ── Bulk loading ──────────────────────────────────────────────────────────

  /// Load every line of `source` into the table described by `shape`.
  pub fn load_table<R: BufRead>(&self, source: R, shape: &TableShape) -> Result<LoadCounts> {
    let conn = self.connect()?;
    Ok(load_records(&conn, source, shape))
  }

  /// Load the file at `path` into the table described by `shape`.
  ///
  /// Fails with [`Error::Source`] if the file cannot be opened.
  pub fn load_file(&self, path: &Path, shape: &TableShape) -> Result<LoadCounts> {
    let conn = self.connect()?;
    load_source(&conn, path, shape)
  }

  /// Import `<Table>.csv` for every table from `data_dir`, lookup tables
  /// first, then `Movie`, then the bridges.
  ///
  /// Only a failure to open the store is an error. Missing sources and
  /// rejected rows are recorded in the returned summary.
  pub fn import(&self, data_dir: &Path) -> Result<ImportSummary> {
    let conn = self.connect()?;

    let reports = IMPORT_ORDER
      .iter()
      .map(|shape| {
        let source = data_dir.join(shape.source_file());
        let outcome = match load_source(&conn, &source, shape) {
          Ok(counts) => {
            info!(
              table = shape.table,
              succeeded = counts.succeeded,
              failed = counts.failed,
              skipped = counts.skipped,
              "source loaded"
            );
            LoadOutcome::Loaded(counts)
          }
          Err(e) => {
            error!("ERROR: {e}. Skipping {} import.", shape.table);
            LoadOutcome::SourceUnavailable { reason: e.to_string() }
          }
        };
        LoadReport { table: shape.table, source, outcome }
      })
      .collect();

    Ok(ImportSummary { reports })
  }

  // ── Queries ───────────────────────────────────────────────────────────────

  /// The ten most recent movie titles.
  pub fn simple_query<W: Write>(&self, out: W) -> Result<usize> {
    self.execute(SIMPLE_QUERY, out)
  }

  /// PG-13 movies with their rating and country.
  pub fn complex_query<W: Write>(&self, out: W) -> Result<usize> {
    self.execute(COMPLEX_QUERY, out)
  }

  /// Run caller-supplied query text.
  ///
  /// Text that does not start with `SELECT` is rejected with
  /// [`reel_core::Error::InvalidStatement`] before the store is opened.
  pub fn user_query<W: Write>(&self, text: &str, out: W) -> Result<usize> {
    let statement = SelectStatement::parse(text)?;
    self.execute(statement.as_str(), out)
  }

  /// Render every row of `sql` to `out` and return the row count.
  fn execute<W: Write>(&self, sql: &str, mut out: W) -> Result<usize> {
    let conn = self.connect()?;
    let mut stmt = conn.prepare(sql)?;
    let mut cursor = SqliteCursor::new(&mut stmt)?;

    let rows = render_rows(&mut cursor, &mut out);
    out.flush()?;
    let rows = rows?;

    debug!(rows, "query complete");
    Ok(rows)
  }

  /// Number of rows in each table, in load order.
  pub fn row_counts(&self) -> Result<Vec<(&'static str, i64)>> {
    let conn = self.connect()?;

    IMPORT_ORDER
      .iter()
      .map(|shape| -> Result<_> {
        let sql = format!("SELECT COUNT(*) FROM {}", shape.table);
        let count: i64 = conn.query_row(&sql, [], |r| r.get(0))?;
        Ok((shape.table, count))
      })
      .collect()
  }
}

/// Open `path` and load it. A path that opens but turns out to be a
/// directory is rejected as an unavailable source.
fn load_source(conn: &Connection, path: &Path, shape: &TableShape) -> Result<LoadCounts> {
  let unavailable = |source: io::Error| Error::Source { path: path.to_path_buf(), source };

  let file = File::open(path).map_err(unavailable)?;
  if file.metadata().map_err(unavailable)?.is_dir() {
    return Err(unavailable(io::Error::from(io::ErrorKind::IsADirectory)));
  }
  Ok(load_records(conn, BufReader::new(file), shape))
}
