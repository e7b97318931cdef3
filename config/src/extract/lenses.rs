// src/extract/lenses.rs

use super::access::Section;
use crate::error::{Error, Result, ValueKind};
use crate::model::Lens;
use toml::Value;

pub(crate) const LENSES_KEY: &str = "lenses";

/// Extracts `[[physics.lenses]]` in file order.
///
/// A missing array is reported against `physics`; any failure inside an element is
/// wrapped in [`Error::ArrayElement`] with the element's 0-based index.
pub(crate) fn extract_lenses(physics: &Section<'_>) -> Result<Vec<Lens>> {
  let elements = physics.array(LENSES_KEY)?;
  let element_path = physics.child_path(LENSES_KEY);

  let lenses = elements
    .iter()
    .enumerate()
    .map(|(index, element)| {
      extract_lens(physics, &element_path, element).map_err(|inner| Error::ArrayElement {
        index,
        inner: Box::new(inner),
      })
    })
    .collect::<Result<Vec<_>>>()?;

  tracing::debug!(count = lenses.len(), "extracted lens list");
  Ok(lenses)
}

fn extract_lens(physics: &Section<'_>, element_path: &str, element: &Value) -> Result<Lens> {
  let Value::Table(table) = element else {
    return Err(Error::mismatch(physics.path(), LENSES_KEY, ValueKind::Table));
  };
  let lens = Section::new(element_path.to_string(), table);

  Ok(Lens {
    x_center_pixel: lens.required("x_center_pixel")?,
    y_center_pixel: lens.required("y_center_pixel")?,
    profile: lens.required("profile")?,
    profile_param_1: lens.required("profile_param_1")?,
    profile_param_2: lens.required("profile_param_2")?,
  })
}
