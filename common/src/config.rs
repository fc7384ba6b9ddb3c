use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::{Error, Language, Result};

use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = "quranshare.toml";

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Eq)]
pub struct Config {
  #[serde(default)]
  pub default_language: Language,
  #[serde(default = "default_state_file")]
  pub state_file: PathBuf,
}

fn default_state_file() -> PathBuf {
  PathBuf::from("quranshare-state.json")
}

impl Default for Config {
  fn default() -> Self {
    Self {
      default_language: Language::default(),
      state_file: default_state_file(),
    }
  }
}

impl Config {
  pub fn load<T>(source_path: T) -> Result<Config>
  where
    T: AsRef<Path>,
  {
    let filename = source_path.as_ref().join(CONFIG_FILE_NAME);
    let contents = std::fs::read_to_string(&filename).map_err(|source| Error::Io {
      path: filename.clone(),
      source,
    })?;

    toml::from_str(&contents).map_err(|source| Error::Config {
      path: filename,
      source,
    })
  }

  /// Like [`Config::load`], but a directory without a config file yields
  /// the defaults.
  pub fn load_or_default<T>(source_path: T) -> Result<Config>
  where
    T: AsRef<Path>,
  {
    if source_path.as_ref().join(CONFIG_FILE_NAME).exists() {
      Self::load(source_path)
    } else {
      Ok(Config::default())
    }
  }
}

impl FromStr for Config {
  type Err = toml::de::Error;
  fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
    toml::from_str(s)
  }
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn empty_config_uses_defaults() {
    let config = Config::from_str("").unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.default_language, Language::Ms);
    assert_eq!(config.state_file, PathBuf::from("quranshare-state.json"));
  }

  #[test]
  fn parses_all_fields() {
    let config = Config::from_str("default_language = \"en\"\nstate_file = \"/tmp/s.json\"").unwrap();
    assert_eq!(config.default_language, Language::En);
    assert_eq!(config.state_file, PathBuf::from("/tmp/s.json"));
  }

  #[test]
  fn load_reads_config_from_directory() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(CONFIG_FILE_NAME), "default_language = \"en\"").unwrap();
    let config = Config::load(dir.path()).unwrap();
    assert_eq!(config.default_language, Language::En);
  }

  #[test]
  fn missing_file_is_an_error_for_load_but_not_for_load_or_default() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(Config::load(dir.path()), Err(Error::Io { .. })));
    assert_eq!(Config::load_or_default(dir.path()).unwrap(), Config::default());
  }

  #[test]
  fn malformed_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(CONFIG_FILE_NAME), "default_language = \"xx\"").unwrap();
    assert!(matches!(Config::load_or_default(dir.path()), Err(Error::Config { .. })));
  }
}
