// src/advisory.rs
// Non-fatal plausibility notes about an otherwise valid configuration.

use crate::model::Config;
use std::fmt;

/// Something in a valid config that is probably not what the author meant.
///
/// Advisories never block a run; the simulation decides what to make of them.
#[derive(Debug, Clone, PartialEq)]
pub enum Advisory {
  MagnitudeRangeInverted { min: i64, max: i64 },
  NoLenses,
  DirectoryWithoutTrailingSlash { field: &'static str, path: String },
}

impl fmt::Display for Advisory {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Advisory::MagnitudeRangeInverted { min, max } => write!(
        f,
        "min_magnitude ({}) is greater than max_magnitude ({}); no galaxies will be selected",
        min, max
      ),
      Advisory::NoLenses => write!(f, "no [[physics.lenses]] defined; images will be undistorted"),
      Advisory::DirectoryWithoutTrailingSlash { field, path } => {
        write!(f, "{} is a directory and should end with '/': \"{}\"", field, path)
      }
    }
  }
}

/// Collects every advisory for `config`, in file order.
pub fn advisories(config: &Config) -> Vec<Advisory> {
  let mut found = Vec::new();

  let directories = [
    ("source_images_path", Some(config.inputs.source_images_path.as_str())),
    ("radius_db_path", Some(config.physics.databases.radius_db_path.as_str())),
    ("red_db_path", Some(config.physics.databases.red_db_path.as_str())),
    ("transformed_stamps_path", config.outputs.transformed_stamps_path.as_deref()),
    ("distorted_stamps_path", config.outputs.distorted_stamps_path.as_deref()),
  ];

  let physics = &config.physics;
  if physics.min_magnitude > physics.max_magnitude {
    found.push(Advisory::MagnitudeRangeInverted {
      min: physics.min_magnitude,
      max: physics.max_magnitude,
    });
  }
  if physics.lenses.is_empty() {
    found.push(Advisory::NoLenses);
  }

  for (field, path) in directories {
    if let Some(path) = path {
      if !path.ends_with('/') {
        found.push(Advisory::DirectoryWithoutTrailingSlash {
          field,
          path: path.to_string(),
        });
      }
    }
  }

  found
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::model::*;

  fn config() -> Config {
    Config {
      inputs: Inputs {
        num_galaxies: 1,
        source_images_path: "input_stamps/".to_string(),
        custom_catalog: None,
      },
      physics: Physics {
        hst_pix_scale: 0.06,
        lsst_pix_scale: 0.263,
        exp_time: 1.0,
        noise_mean: 0.0001,
        min_magnitude: 22,
        max_magnitude: 28,
        single_redshift: true,
        fixed_redshift: 1.0,
        power: 0.34,
        lens_z: 0.07,
        lenses: vec![Lens {
          x_center_pixel: 0,
          y_center_pixel: 0,
          profile: "SIS".to_string(),
          profile_param_1: 1.0,
          profile_param_2: 1.0,
        }],
        convolve: Convolve {
          psf_file: "psf.fits".to_string(),
        },
        databases: Databases {
          radius_db_path: "radius_db/".to_string(),
          red_db_path: "red_db/".to_string(),
        },
      },
      output_image_settings: OutputImageSettings {
        final_size_x: 1,
        final_size_y: 1,
        x_border: 0,
        y_border: 0,
        x_trim: 0,
        y_trim: 0,
      },
      outputs: Outputs::default(),
    }
  }

  #[test]
  fn plausible_config_has_no_advisories() {
    assert!(advisories(&config()).is_empty());
  }

  #[test]
  fn flags_inverted_magnitudes_and_missing_lenses() {
    let mut c = config();
    c.physics.min_magnitude = 30;
    c.physics.lenses.clear();

    assert_eq!(
      advisories(&c),
      vec![
        Advisory::MagnitudeRangeInverted { min: 30, max: 28 },
        Advisory::NoLenses,
      ]
    );
  }

  #[test]
  fn flags_directories_missing_a_slash() {
    let mut c = config();
    c.physics.databases.red_db_path = "red_db".to_string();
    c.outputs.distorted_stamps_path = Some("out/distorted".to_string());
    c.outputs.catalog_path = Some("out/catalog.txt".to_string());

    let found = advisories(&c);
    assert_eq!(found.len(), 2);
    assert_eq!(
      found[0].to_string(),
      "red_db_path is a directory and should end with '/': \"red_db\""
    );
    assert!(matches!(
      found[1],
      Advisory::DirectoryWithoutTrailingSlash {
        field: "distorted_stamps_path",
        ..
      }
    ));
  }
}
