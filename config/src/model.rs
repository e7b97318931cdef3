// src/model.rs
// The validated, strongly-typed configuration handed to the simulation.

use serde::Serialize;

/// A fully validated jedisim configuration.
///
/// Built once by [`crate::load_config`] or [`crate::parse_config`] and read-only
/// afterwards. Every string is owned, so the value outlives the parse tree it came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Config {
  pub inputs: Inputs,
  pub physics: Physics,
  pub output_image_settings: OutputImageSettings,
  pub outputs: Outputs,
}

// --- [inputs] ---
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Inputs {
  /// Number of galaxies to simulate.
  pub num_galaxies: u64,
  /// Directory holding the source galaxy postage stamps.
  pub source_images_path: String,
  /// Optional catalog to use instead of generating one.
  pub custom_catalog: Option<String>,
}

// --- [physics] ---
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Physics {
  /// Arcseconds per pixel.
  #[serde(rename = "HST_pix_scale")]
  pub hst_pix_scale: f64,
  /// Arcseconds per pixel.
  #[serde(rename = "LSST_pix_scale")]
  pub lsst_pix_scale: f64,
  /// Exposure time in seconds.
  pub exp_time: f64,
  /// Mean of the Poisson noise.
  pub noise_mean: f64,
  /// Magnitude bounds of the simulated galaxies, both inclusive.
  pub min_magnitude: i64,
  pub max_magnitude: i64,
  /// Use `fixed_redshift` for every source galaxy.
  pub single_redshift: bool,
  pub fixed_redshift: f64,
  /// Exponent of the power-law galaxy distribution.
  pub power: f64,
  /// Redshift of the lenses.
  pub lens_z: f64,
  pub lenses: Vec<Lens>,
  pub convolve: Convolve,
  pub databases: Databases,
}

/// One gravitational lens, as listed under `[[physics.lenses]]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Lens {
  pub x_center_pixel: i64,
  pub y_center_pixel: i64,
  /// Name of the mass-distribution model, e.g. `NFW` or `SIS`.
  pub profile: String,
  /// Profile-specific parameters.
  pub profile_param_1: f64,
  pub profile_param_2: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Convolve {
  pub psf_file: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Databases {
  pub radius_db_path: String,
  pub red_db_path: String,
}

// --- [output_image_settings] ---
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutputImageSettings {
  pub final_size_x: i64,
  pub final_size_y: i64,
  pub x_border: i64,
  pub y_border: i64,
  pub x_trim: i64,
  pub y_trim: i64,
}

// --- [outputs] ---

/// Output destinations. `None` means the output is not produced.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Outputs {
  pub catalog_path: Option<String>,
  pub transformed_catalog_path: Option<String>,
  pub transformed_stamps_path: Option<String>,
  pub distorted_stamps_path: Option<String>,
  #[serde(rename = "HST_path")]
  pub hst_path: Option<String>,
  #[serde(rename = "HST_convolved_path")]
  pub hst_convolved_path: Option<String>,
  #[serde(rename = "HST_convolved_noise_path")]
  pub hst_convolved_noise_path: Option<String>,
  #[serde(rename = "LSST_convolved_path")]
  pub lsst_convolved_path: Option<String>,
  #[serde(rename = "LSST_convolved_noise_path")]
  pub lsst_convolved_noise_path: Option<String>,
}

impl Outputs {
  /// All output slots keyed by their config key, in file order.
  pub fn entries(&self) -> [(&'static str, Option<&str>); 9] {
    [
      ("catalog_path", self.catalog_path.as_deref()),
      ("transformed_catalog_path", self.transformed_catalog_path.as_deref()),
      ("transformed_stamps_path", self.transformed_stamps_path.as_deref()),
      ("distorted_stamps_path", self.distorted_stamps_path.as_deref()),
      ("HST_path", self.hst_path.as_deref()),
      ("HST_convolved_path", self.hst_convolved_path.as_deref()),
      ("HST_convolved_noise_path", self.hst_convolved_noise_path.as_deref()),
      ("LSST_convolved_path", self.lsst_convolved_path.as_deref()),
      ("LSST_convolved_noise_path", self.lsst_convolved_noise_path.as_deref()),
    ]
  }

  /// The outputs that will be written, as `(key, path)` pairs.
  pub fn requested(&self) -> Vec<(&'static str, &str)> {
    self
      .entries()
      .into_iter()
      .filter_map(|(key, path)| path.map(|p| (key, p)))
      .collect()
  }
}

impl Config {
  /// Tears the configuration down once the simulation is done with it.
  ///
  /// Consuming `self` makes a second release, or a read after release, a compile error.
  pub fn release(self) {
    tracing::trace!(
      lenses = self.physics.lenses.len(),
      outputs = self.outputs.requested().len(),
      "releasing configuration"
    );
  }
}
