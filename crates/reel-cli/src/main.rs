//! `reel` — load and query the movie catalog from the console.
//!
//! # Usage
//!
//! ```
//! reel                      # interactive menu
//! reel schema               # (re)create the ten tables
//! reel import --data-dir ./csv
//! reel query "SELECT * FROM Rating"
//! ```
//!
//! Diagnostics are logged to stderr; tables and banners go to stdout.

mod console;
mod menu;
mod settings;

use std::{io, path::PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use console::Console;
use settings::{Overrides, Settings};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "reel", version, about = "Movie catalog loader and query console")]
struct Cli {
  /// Path to a TOML config file (store_path, data_dir).
  #[arg(short, long, value_name = "FILE")]
  config: Option<PathBuf>,

  /// SQLite database file (default: movie_db.sqlite).
  #[arg(long, value_name = "PATH")]
  store: Option<PathBuf>,

  /// Directory containing the `<Table>.csv` source files (default: .).
  #[arg(long, value_name = "DIR")]
  data_dir: Option<PathBuf>,

  /// Run one operation and exit. Without a command the menu is shown.
  #[command(subcommand)]
  command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Drop and recreate all ten tables.
  Schema,
  /// Bulk load every table from its CSV file.
  Import,
  /// Ten most recent movie titles.
  Simple,
  /// PG-13 movies with their rating and country.
  Complex,
  /// Run a SELECT statement.
  Query {
    /// Statement text; must begin with SELECT.
    sql: String,
  },
  /// Show the row count of every table.
  Tables,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_writer(io::stderr)
    .with_target(false)
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let settings = Settings::load(
    cli.config.as_deref(),
    Overrides { store_path: cli.store, data_dir: cli.data_dir },
  )?;
  tracing::debug!(?settings, "configuration loaded");

  let mut console = Console::new(&settings, io::stdout().lock());

  match cli.command {
    None => menu::run(&mut console, io::stdin().lock()),
    Some(Command::Schema) => console.define_schema(),
    Some(Command::Import) => console.import(),
    Some(Command::Simple) => console.simple_query(),
    Some(Command::Complex) => console.complex_query(),
    Some(Command::Query { sql }) => console.user_query(&sql),
    Some(Command::Tables) => console.tables(),
  }
}
