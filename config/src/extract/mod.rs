// src/extract/mod.rs
// Turns a parsed TOML tree into a validated `Config`.

mod access;
mod lenses;
pub mod schema;

use crate::error::Result;
use crate::model::{
  Config, Convolve, Databases, Inputs, OutputImageSettings, Outputs, Physics,
};
use access::Section;
use toml::Table;

/// Extracts a [`Config`] from an already parsed tree.
///
/// Sections are visited in file order (inputs, physics with its lenses, convolve and
/// databases, output_image_settings, outputs) and the first failure is returned.
pub fn extract_config(tree: &Table) -> Result<Config> {
  let root = Section::root(tree);

  // Struct literal fields are evaluated top to bottom, which fixes the error order.
  let config = Config {
    inputs: extract_inputs(&root)?,
    physics: extract_physics(&root)?,
    output_image_settings: extract_output_image_settings(&root)?,
    outputs: extract_outputs(&root)?,
  };

  for key in schema::unknown_keys(tree) {
    tracing::warn!(key = %key, "ignoring unrecognized config key");
  }

  Ok(config)
}

fn extract_inputs(root: &Section<'_>) -> Result<Inputs> {
  let inputs = root.table("inputs")?;
  Ok(Inputs {
    num_galaxies: inputs.required("num_galaxies")?,
    source_images_path: inputs.required("source_images_path")?,
    custom_catalog: inputs.optional("custom_catalog")?,
  })
}

fn extract_physics(root: &Section<'_>) -> Result<Physics> {
  let physics = root.table("physics")?;
  Ok(Physics {
    hst_pix_scale: physics.required("HST_pix_scale")?,
    lsst_pix_scale: physics.required("LSST_pix_scale")?,
    exp_time: physics.required("exp_time")?,
    noise_mean: physics.required("noise_mean")?,
    min_magnitude: physics.required("min_magnitude")?,
    max_magnitude: physics.required("max_magnitude")?,
    single_redshift: physics.required("single_redshift")?,
    fixed_redshift: physics.required("fixed_redshift")?,
    power: physics.required("power")?,
    lens_z: physics.required("lens_z")?,
    lenses: lenses::extract_lenses(&physics)?,
    convolve: extract_convolve(&physics)?,
    databases: extract_databases(&physics)?,
  })
}

fn extract_convolve(physics: &Section<'_>) -> Result<Convolve> {
  let convolve = physics.table("convolve")?;
  Ok(Convolve {
    psf_file: convolve.required("psf_file")?,
  })
}

fn extract_databases(physics: &Section<'_>) -> Result<Databases> {
  let databases = physics.table("databases")?;
  Ok(Databases {
    radius_db_path: databases.required("radius_db_path")?,
    red_db_path: databases.required("red_db_path")?,
  })
}

fn extract_output_image_settings(root: &Section<'_>) -> Result<OutputImageSettings> {
  let settings = root.table("output_image_settings")?;
  Ok(OutputImageSettings {
    final_size_x: settings.required("final_size_x")?,
    final_size_y: settings.required("final_size_y")?,
    x_border: settings.required("x_border")?,
    y_border: settings.required("y_border")?,
    x_trim: settings.required("x_trim")?,
    y_trim: settings.required("y_trim")?,
  })
}

fn extract_outputs(root: &Section<'_>) -> Result<Outputs> {
  let outputs = root.table("outputs")?;
  Ok(Outputs {
    catalog_path: outputs.optional("catalog_path")?,
    transformed_catalog_path: outputs.optional("transformed_catalog_path")?,
    transformed_stamps_path: outputs.optional("transformed_stamps_path")?,
    distorted_stamps_path: outputs.optional("distorted_stamps_path")?,
    hst_path: outputs.optional("HST_path")?,
    hst_convolved_path: outputs.optional("HST_convolved_path")?,
    hst_convolved_noise_path: outputs.optional("HST_convolved_noise_path")?,
    lsst_convolved_path: outputs.optional("LSST_convolved_path")?,
    lsst_convolved_noise_path: outputs.optional("LSST_convolved_noise_path")?,
  })
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::error::Error;

  const MINIMAL: &str = r#"
[inputs]
num_galaxies = 10
source_images_path = "stamps/"

[physics]
HST_pix_scale = 0.06
LSST_pix_scale = 0.263
exp_time = 100.0
noise_mean = 10.0
min_magnitude = 22
max_magnitude = 28
single_redshift = 0
fixed_redshift = 1.5
power = 0.33
lens_z = 0.3
lenses = []

[physics.convolve]
psf_file = "psf.fits"

[physics.databases]
radius_db_path = "radius/"
red_db_path = "red/"

[output_image_settings]
final_size_x = 100
final_size_y = 100
x_border = 10
y_border = 10
x_trim = 20
y_trim = 20

[outputs]
"#;

  fn tree(text: &str) -> Table {
    toml::from_str(text).unwrap()
  }

  #[test]
  fn minimal_config_leaves_optionals_absent() {
    let config = extract_config(&tree(MINIMAL)).unwrap();

    assert_eq!(config.inputs.custom_catalog, None);
    assert_eq!(config.outputs, Outputs::default());
    assert!(!config.physics.single_redshift);
    assert!(config.physics.lenses.is_empty());
  }

  #[test]
  fn first_failing_section_wins() {
    let mut t = tree(MINIMAL);
    t.remove("outputs");
    t.get_mut("inputs")
      .and_then(|v| v.as_table_mut())
      .unwrap()
      .remove("num_galaxies");

    match extract_config(&t) {
      Err(Error::MissingField { table, key }) => {
        assert_eq!(table, "inputs");
        assert_eq!(key, "num_galaxies");
      }
      other => panic!("Expected MissingField, got {:?}", other),
    }
  }

  #[test]
  fn missing_nested_section_is_reported_against_parent() {
    let mut t = tree(MINIMAL);
    t.get_mut("physics")
      .and_then(|v| v.as_table_mut())
      .unwrap()
      .remove("databases");

    match extract_config(&t) {
      Err(Error::MissingField { table, key }) => {
        assert_eq!(table, "physics");
        assert_eq!(key, "databases");
      }
      other => panic!("Expected MissingField, got {:?}", other),
    }
  }
}
