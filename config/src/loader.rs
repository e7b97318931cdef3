// src/loader.rs
// Reads config files from disk and hands them to the extractor.

use crate::error::{Error, Result};
use crate::extract::extract_config;
use crate::model::Config;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use toml::Table;

/// Reads the whole file at `path` into an owned string.
///
/// Unreadable files and non UTF-8 content are both reported as [`Error::Io`].
pub fn load_text(path: &Path) -> Result<String> {
  let text = fs::read_to_string(path).map_err(|source| Error::Io {
    path: path.to_path_buf(),
    source,
  })?;
  tracing::debug!(path = ?path, bytes = text.len(), "read config file");
  Ok(text)
}

/// Parses and validates config text. The parse tree is dropped before returning.
pub fn parse_config(text: &str) -> Result<Config> {
  let tree: Table = toml::from_str(text)?;
  let config = extract_config(&tree)?;
  tracing::debug!(
    lenses = config.physics.lenses.len(),
    outputs = config.outputs.requested().len(),
    "extracted configuration"
  );
  Ok(config)
}

/// Loads and validates the config file at `path`.
pub fn load_config(path: &Path) -> Result<Config> {
  let text = load_text(path)?;
  parse_config(&text)
}

impl FromStr for Config {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    parse_config(s)
  }
}

impl Config {
  /// Same as [`load_config`].
  pub fn from_path(path: &Path) -> Result<Self> {
    load_config(path)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::io::Write;
  use tempfile::{tempdir, NamedTempFile};

  #[test]
  fn load_text_reads_entire_file() {
    let mut file = NamedTempFile::new().unwrap();
    let body = "[inputs]\nnum_galaxies = 45000\n".repeat(100);
    file.write_all(body.as_bytes()).unwrap();

    assert_eq!(load_text(file.path()).unwrap(), body);
  }

  #[test]
  fn load_text_missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("absent.toml");

    match load_text(&path) {
      Err(Error::Io { path: reported, .. }) => assert_eq!(reported, path),
      other => panic!("Expected Io error, got {:?}", other),
    }
  }

  #[test]
  fn load_text_rejects_invalid_utf8() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(&[0x5b, 0xff, 0xfe, 0x5d]).unwrap();

    assert!(matches!(load_text(file.path()), Err(Error::Io { .. })));
  }

  #[test]
  fn malformed_text_is_a_syntax_error() {
    assert!(matches!(
      parse_config("[inputs\nnum_galaxies = "),
      Err(Error::Syntax(_))
    ));
    assert!(matches!(
      "[inputs]\nnum_galaxies = 1\nnum_galaxies = 2".parse::<Config>(),
      Err(Error::Syntax(_))
    ));
  }
}
