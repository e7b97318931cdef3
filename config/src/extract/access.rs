// src/extract/access.rs
// Typed, located access to keys of a parsed TOML table.

use crate::error::{Error, Result, ValueKind};
use toml::{Table, Value};

/// A scalar type that a config key can be converted into.
pub(crate) trait FieldValue: Sized {
  const KIND: ValueKind;

  /// Returns `None` when `value` cannot represent `Self`.
  fn from_value(value: &Value) -> Option<Self>;
}

impl FieldValue for i64 {
  const KIND: ValueKind = ValueKind::Integer;

  fn from_value(value: &Value) -> Option<Self> {
    value.as_integer()
  }
}

impl FieldValue for u64 {
  const KIND: ValueKind = ValueKind::NonNegativeInteger;

  fn from_value(value: &Value) -> Option<Self> {
    value.as_integer().and_then(|i| u64::try_from(i).ok())
  }
}

impl FieldValue for f64 {
  const KIND: ValueKind = ValueKind::Float;

  // Whole numbers written without a decimal point are accepted as floats.
  fn from_value(value: &Value) -> Option<Self> {
    match value {
      Value::Float(f) => Some(*f),
      Value::Integer(i) => Some(*i as f64),
      _ => None,
    }
  }
}

impl FieldValue for bool {
  const KIND: ValueKind = ValueKind::Boolean;

  // Some config files spell flags as 0/1.
  fn from_value(value: &Value) -> Option<Self> {
    match value {
      Value::Boolean(b) => Some(*b),
      Value::Integer(0) => Some(false),
      Value::Integer(1) => Some(true),
      _ => None,
    }
  }
}

impl FieldValue for String {
  const KIND: ValueKind = ValueKind::String;

  fn from_value(value: &Value) -> Option<Self> {
    value.as_str().map(str::to_owned)
  }
}

/// A table of the parse tree together with its dotted path, used for error locations.
#[derive(Debug, Clone)]
pub(crate) struct Section<'a> {
  path: String,
  table: &'a Table,
}

impl<'a> Section<'a> {
  pub(crate) fn root(table: &'a Table) -> Self {
    Self::new(String::new(), table)
  }

  pub(crate) fn new(path: String, table: &'a Table) -> Self {
    Self { path, table }
  }

  pub(crate) fn path(&self) -> &str {
    &self.path
  }

  /// Dotted path of a key nested in this section.
  pub(crate) fn child_path(&self, key: &str) -> String {
    if self.path.is_empty() {
      key.to_string()
    } else {
      format!("{}.{}", self.path, key)
    }
  }

  /// A sub-table that must be present.
  pub(crate) fn table(&self, key: &str) -> Result<Section<'a>> {
    match self.table.get(key) {
      None => Err(Error::missing(&self.path, key)),
      Some(Value::Table(inner)) => Ok(Section::new(self.child_path(key), inner)),
      Some(_) => Err(Error::mismatch(&self.path, key, ValueKind::Table)),
    }
  }

  /// An array that must be present. Elements are checked by the caller.
  pub(crate) fn array(&self, key: &str) -> Result<&'a [Value]> {
    match self.table.get(key) {
      None => Err(Error::missing(&self.path, key)),
      Some(Value::Array(items)) => Ok(items.as_slice()),
      Some(_) => Err(Error::mismatch(&self.path, key, ValueKind::ArrayOfTables)),
    }
  }

  /// A key that must be present and convertible to `T`.
  pub(crate) fn required<T: FieldValue>(&self, key: &str) -> Result<T> {
    self
      .optional(key)?
      .ok_or_else(|| Error::missing(&self.path, key))
  }

  /// A key that may be absent. A present value of the wrong type is still an error.
  pub(crate) fn optional<T: FieldValue>(&self, key: &str) -> Result<Option<T>> {
    match self.table.get(key) {
      None => Ok(None),
      Some(value) => T::from_value(value)
        .map(Some)
        .ok_or_else(|| Error::mismatch(&self.path, key, T::KIND)),
    }
  }
}
