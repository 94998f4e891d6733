//! Runtime configuration.
//!
//! Layered lowest to highest: built-in defaults, the TOML file, `REEL_*`
//! environment variables, then command-line flags.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::Deserialize;

const DEFAULT_CONFIG: &str = "reel.toml";

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
  /// SQLite database file.
  pub store_path: PathBuf,
  /// Directory holding `<Table>.csv` for every table.
  pub data_dir:   PathBuf,
}

/// Flag values that override every other source when present.
#[derive(Debug, Default)]
pub struct Overrides {
  pub store_path: Option<PathBuf>,
  pub data_dir:   Option<PathBuf>,
}

impl Settings {
  /// Load settings. An explicit `config` file must exist; the default
  /// `reel.toml` is optional.
  pub fn load(config: Option<&Path>, overrides: Overrides) -> anyhow::Result<Self> {
    let file = match config {
      Some(path) => config::File::from(path).required(true),
      None => config::File::with_name(DEFAULT_CONFIG).required(false),
    };

    let settings = config::Config::builder()
      .set_default("store_path", "movie_db.sqlite")?
      .set_default("data_dir", ".")?
      .add_source(file)
      .add_source(config::Environment::with_prefix("REEL"))
      .set_override_option("store_path", overrides.store_path.map(path_value))?
      .set_override_option("data_dir", overrides.data_dir.map(path_value))?
      .build()
      .context("failed to read configuration")?;

    settings
      .try_deserialize()
      .context("failed to deserialise Settings")
  }
}

fn path_value(path: PathBuf) -> String { path.to_string_lossy().into_owned() }

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn flags_override_file() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("reel.toml");
    std::fs::write(&file, "store_path = \"from_file.sqlite\"\ndata_dir = \"csv\"\n").unwrap();

    let settings = Settings::load(
      Some(&file),
      Overrides { store_path: Some("flag.sqlite".into()), data_dir: None },
    )
    .unwrap();

    assert_eq!(settings.store_path, PathBuf::from("flag.sqlite"));
    assert_eq!(settings.data_dir, PathBuf::from("csv"));
  }

  #[test]
  fn explicit_config_must_exist() {
    let missing = Path::new("/definitely/not/here/reel.toml");
    assert!(Settings::load(Some(missing), Overrides::default()).is_err());
  }
}
