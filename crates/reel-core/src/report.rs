//! Outcome types for bulk loading.

use std::{ops::Add, path::PathBuf};

/// Per-source tallies.
///
/// `skipped` counts lines that did not fit the shape. They are neither a
/// success nor a failure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadCounts {
  pub succeeded: usize,
  pub failed:    usize,
  pub skipped:   usize,
}

impl Add for LoadCounts {
  type Output = Self;

  fn add(self, rhs: Self) -> Self {
    Self {
      succeeded: self.succeeded + rhs.succeeded,
      failed:    self.failed + rhs.failed,
      skipped:   self.skipped + rhs.skipped,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
  Loaded(LoadCounts),
  /// The source file could not be opened; nothing was read from it.
  SourceUnavailable { reason: String },
}

/// What happened to one source during an import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
  pub table:   &'static str,
  pub source:  PathBuf,
  pub outcome: LoadOutcome,
}

impl LoadReport {
  /// Counts for this source; an unavailable source contributes zero.
  pub fn counts(&self) -> LoadCounts {
    match &self.outcome {
      LoadOutcome::Loaded(counts) => *counts,
      LoadOutcome::SourceUnavailable { .. } => LoadCounts::default(),
    }
  }

  pub fn is_loaded(&self) -> bool {
    matches!(self.outcome, LoadOutcome::Loaded(_))
  }
}

/// Result of importing every source, in load order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSummary {
  pub reports: Vec<LoadReport>,
}

impl ImportSummary {
  pub fn totals(&self) -> LoadCounts {
    self
      .reports
      .iter()
      .map(LoadReport::counts)
      .fold(LoadCounts::default(), |acc, c| acc + c)
  }

  pub fn report(&self, table: &str) -> Option<&LoadReport> {
    self.reports.iter().find(|r| r.table == table)
  }

  /// Sources that could not be opened.
  pub fn unavailable(&self) -> impl Iterator<Item = &LoadReport> {
    self.reports.iter().filter(|r| !r.is_loaded())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn loaded(table: &'static str, succeeded: usize, failed: usize) -> LoadReport {
    LoadReport {
      table,
      source: PathBuf::from(format!("{table}.csv")),
      outcome: LoadOutcome::Loaded(LoadCounts { succeeded, failed, skipped: 1 }),
    }
  }

  #[test]
  fn totals_ignore_unavailable_sources() {
    let summary = ImportSummary {
      reports: vec![
        loaded("Rating", 4, 1),
        LoadReport {
          table:   "Country",
          source:  PathBuf::from("Country.csv"),
          outcome: LoadOutcome::SourceUnavailable { reason: "gone".into() },
        },
        loaded("Genre", 3, 0),
      ],
    };

    assert_eq!(
      summary.totals(),
      LoadCounts { succeeded: 7, failed: 1, skipped: 2 }
    );
    let missing: Vec<_> = summary.unavailable().map(|r| r.table).collect();
    assert_eq!(missing, ["Country"]);
    assert_eq!(summary.report("Country").unwrap().counts(), LoadCounts::default());
  }
}
