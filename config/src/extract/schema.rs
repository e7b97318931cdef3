// src/extract/schema.rs
// Declarative catalog of every key jedisim understands, in extraction order.

use crate::error::ValueKind;
use toml::{Table, Value};

/// Describes one key of the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
  /// Dotted path of the table holding the key.
  pub table: &'static str,
  pub key: &'static str,
  pub kind: ValueKind,
  pub required: bool,
}

const fn req(table: &'static str, key: &'static str, kind: ValueKind) -> FieldDef {
  FieldDef {
    table,
    key,
    kind,
    required: true,
  }
}

const fn opt(table: &'static str, key: &'static str, kind: ValueKind) -> FieldDef {
  FieldDef {
    table,
    key,
    kind,
    required: false,
  }
}

/// Tables that must exist, parents before children.
pub const SECTIONS: &[&str] = &[
  "inputs",
  "physics",
  "physics.convolve",
  "physics.databases",
  "output_image_settings",
  "outputs",
];

/// Dotted path of the lens array of tables.
pub const LENSES_TABLE: &str = "physics.lenses";

/// Scalar keys outside the lens array.
pub const FIELDS: &[FieldDef] = &[
  req("inputs", "num_galaxies", ValueKind::NonNegativeInteger),
  req("inputs", "source_images_path", ValueKind::String),
  opt("inputs", "custom_catalog", ValueKind::String),
  req("physics", "HST_pix_scale", ValueKind::Float),
  req("physics", "LSST_pix_scale", ValueKind::Float),
  req("physics", "exp_time", ValueKind::Float),
  req("physics", "noise_mean", ValueKind::Float),
  req("physics", "min_magnitude", ValueKind::Integer),
  req("physics", "max_magnitude", ValueKind::Integer),
  req("physics", "single_redshift", ValueKind::Boolean),
  req("physics", "fixed_redshift", ValueKind::Float),
  req("physics", "power", ValueKind::Float),
  req("physics", "lens_z", ValueKind::Float),
  req("physics.convolve", "psf_file", ValueKind::String),
  req("physics.databases", "radius_db_path", ValueKind::String),
  req("physics.databases", "red_db_path", ValueKind::String),
  req("output_image_settings", "final_size_x", ValueKind::Integer),
  req("output_image_settings", "final_size_y", ValueKind::Integer),
  req("output_image_settings", "x_border", ValueKind::Integer),
  req("output_image_settings", "y_border", ValueKind::Integer),
  req("output_image_settings", "x_trim", ValueKind::Integer),
  req("output_image_settings", "y_trim", ValueKind::Integer),
  opt("outputs", "catalog_path", ValueKind::String),
  opt("outputs", "transformed_catalog_path", ValueKind::String),
  opt("outputs", "transformed_stamps_path", ValueKind::String),
  opt("outputs", "distorted_stamps_path", ValueKind::String),
  opt("outputs", "HST_path", ValueKind::String),
  opt("outputs", "HST_convolved_path", ValueKind::String),
  opt("outputs", "HST_convolved_noise_path", ValueKind::String),
  opt("outputs", "LSST_convolved_path", ValueKind::String),
  opt("outputs", "LSST_convolved_noise_path", ValueKind::String),
];

/// Keys of every `[[physics.lenses]]` element.
pub const LENS_FIELDS: &[FieldDef] = &[
  req(LENSES_TABLE, "x_center_pixel", ValueKind::Integer),
  req(LENSES_TABLE, "y_center_pixel", ValueKind::Integer),
  req(LENSES_TABLE, "profile", ValueKind::String),
  req(LENSES_TABLE, "profile_param_1", ValueKind::Float),
  req(LENSES_TABLE, "profile_param_2", ValueKind::Float),
];

fn join(parent: &str, key: &str) -> String {
  if parent.is_empty() {
    key.to_string()
  } else {
    format!("{}.{}", parent, key)
  }
}

fn is_known_field(table: &str, key: &str, fields: &[FieldDef]) -> bool {
  fields.iter().any(|f| f.table == table && f.key == key)
}

/// Dotted paths of keys that no part of the schema reads.
///
/// Lens elements are reported as `physics.lenses[i].key`.
pub fn unknown_keys(root: &Table) -> Vec<String> {
  let mut unknown = Vec::new();
  collect_unknown(root, "", &mut unknown);
  unknown
}

fn collect_unknown(table: &Table, path: &str, unknown: &mut Vec<String>) {
  for (key, value) in table {
    let full = join(path, key);

    if full == LENSES_TABLE {
      if let Value::Array(items) = value {
        for (index, item) in items.iter().enumerate() {
          if let Value::Table(lens) = item {
            for lens_key in lens.keys() {
              if !is_known_field(LENSES_TABLE, lens_key, LENS_FIELDS) {
                unknown.push(format!("{}[{}].{}", LENSES_TABLE, index, lens_key));
              }
            }
          }
        }
      }
      continue;
    }

    if SECTIONS.contains(&full.as_str()) {
      if let Value::Table(inner) = value {
        collect_unknown(inner, &full, unknown);
      }
      continue;
    }

    if !is_known_field(path, key, FIELDS) {
      unknown.push(full);
    }
  }
}
