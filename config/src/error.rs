use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// The kind of value a configuration key is expected to hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
  Integer,
  NonNegativeInteger,
  Float,
  Boolean,
  String,
  Table,
  ArrayOfTables,
}

impl fmt::Display for ValueKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let name = match self {
      ValueKind::Integer => "integer",
      ValueKind::NonNegativeInteger => "non-negative integer",
      ValueKind::Float => "float",
      ValueKind::Boolean => "boolean",
      ValueKind::String => "string",
      ValueKind::Table => "table",
      ValueKind::ArrayOfTables => "array of tables",
    };
    f.write_str(name)
  }
}

/// The main error type for `jedisim_config`.
#[derive(Debug, Error)]
pub enum Error {
  #[error("could not read config file {path:?}: {source}")]
  Io {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("couldn't parse config file: {0}")]
  Syntax(#[from] toml::de::Error),

  #[error("{key} not found in {}", table_label(.table))]
  MissingField { table: String, key: String },

  #[error("{key} in {} must be of type {expected}", table_label(.table))]
  TypeMismatch {
    table: String,
    key: String,
    expected: ValueKind,
  },

  #[error("lens {index}: {inner}")]
  ArrayElement {
    index: usize,
    #[source]
    inner: Box<Error>,
  },
}

impl Error {
  pub(crate) fn missing(table: &str, key: &str) -> Self {
    Error::MissingField {
      table: table.to_string(),
      key: key.to_string(),
    }
  }

  pub(crate) fn mismatch(table: &str, key: &str, expected: ValueKind) -> Self {
    Error::TypeMismatch {
      table: table.to_string(),
      key: key.to_string(),
      expected,
    }
  }
}

/// Dotted table paths are empty for the document root.
fn table_label(table: &str) -> String {
  if table.is_empty() {
    "root table".to_string()
  } else {
    format!("[{}]", table)
  }
}

/// A specialized `Result` type for `jedisim_config` operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn messages_name_table_and_key() {
    let err = Error::missing("physics", "lens_z");
    assert_eq!(err.to_string(), "lens_z not found in [physics]");

    let err = Error::mismatch("physics.convolve", "psf_file", ValueKind::String);
    assert_eq!(
      err.to_string(),
      "psf_file in [physics.convolve] must be of type string"
    );
  }

  #[test]
  fn root_table_is_named_explicitly() {
    let err = Error::missing("", "outputs");
    assert_eq!(err.to_string(), "outputs not found in root table");
  }

  #[test]
  fn array_element_wraps_inner_message() {
    let err = Error::ArrayElement {
      index: 1,
      inner: Box::new(Error::missing("physics.lenses", "profile")),
    };
    assert_eq!(
      err.to_string(),
      "lens 1: profile not found in [physics.lenses]"
    );
  }
}
