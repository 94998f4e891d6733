//! The five catalog operations, with the banners printed around them.
//!
//! Tables and banners go to the console's writer (stdout in the binary).
//! Failures are returned to the caller, which decides whether they end the
//! process or just get logged.

use std::{
  io::Write,
  path::PathBuf,
};

use anyhow::Result;
use reel_core::query::SelectStatement;
use reel_store_sqlite::MovieStore;

use crate::settings::Settings;

pub struct Console<W> {
  store:    MovieStore,
  data_dir: PathBuf,
  out:      W,
}

impl<W: Write> Console<W> {
  pub fn new(settings: &Settings, out: W) -> Self {
    Self {
      store: MovieStore::new(&settings.store_path),
      data_dir: settings.data_dir.clone(),
      out,
    }
  }

  pub(crate) fn out(&mut self) -> &mut W { &mut self.out }

  pub fn define_schema(&mut self) -> Result<()> {
    writeln!(
      self.out,
      "\nAttempting to create database schema in {}...",
      self.store.path().display()
    )?;
    self.store.define_schema()?;
    writeln!(self.out, "Database schema created successfully.")?;
    Ok(())
  }

  pub fn import(&mut self) -> Result<()> {
    writeln!(self.out, "\nAttempting to import data from CSV files...")?;
    let summary = self.store.import(&self.data_dir)?;

    for report in summary.reports.iter().filter(|r| r.is_loaded()) {
      writeln!(
        self.out,
        "Imported {} rows into {} table successfully.",
        report.counts().succeeded,
        report.table
      )?;
    }

    let totals = summary.totals();
    writeln!(
      self.out,
      "Import finished: {} rows imported, {} rejected, {} malformed lines skipped, {} sources missing.",
      totals.succeeded,
      totals.failed,
      totals.skipped,
      summary.unavailable().count()
    )?;
    Ok(())
  }

  pub fn simple_query(&mut self) -> Result<()> {
    writeln!(
      self.out,
      "\n--- Simple SELECT: most recent movie titles and release years ---"
    )?;
    let rows = self.store.simple_query(&mut self.out)?;
    self.retrieved(rows)
  }

  pub fn complex_query(&mut self) -> Result<()> {
    writeln!(
      self.out,
      "\n--- Complex SELECT: movie titles, ratings and countries (JOIN) ---"
    )?;
    let rows = self.store.complex_query(&mut self.out)?;
    self.retrieved(rows)
  }

  pub fn user_query(&mut self, sql: &str) -> Result<()> {
    let statement = SelectStatement::parse(sql)?;
    writeln!(self.out, "\n--- Executing user-defined query ---")?;
    writeln!(self.out, "SQL: {statement}")?;
    let rows = self.store.user_query(statement.as_str(), &mut self.out)?;
    self.retrieved(rows)
  }

  /// Row count of every table.
  pub fn tables(&mut self) -> Result<()> {
    for (table, count) in self.store.row_counts()? {
      writeln!(self.out, "{table:<20} {count}")?;
    }
    Ok(())
  }

  fn retrieved(&mut self, rows: usize) -> Result<()> {
    writeln!(self.out, "\nSuccessfully retrieved {rows} rows.")?;
    Ok(())
  }
}
