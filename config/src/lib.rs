//! `jedisim_config` - loads and validates jedisim simulation configuration files.
//!
//! A config file is TOML with the tables `[inputs]`, `[physics]` (plus
//! `[[physics.lenses]]`, `[physics.convolve]` and `[physics.databases]`),
//! `[output_image_settings]` and `[outputs]`. Loading either yields a fully populated
//! [`Config`] or the first [`Error`] found, reading the file top to bottom.
//!
//! ```no_run
//! use std::path::Path;
//!
//! let config = jedisim_config::load_config(Path::new("sample_config.toml"))?;
//! println!("{} lenses", config.physics.lenses.len());
//! # Ok::<(), jedisim_config::Error>(())
//! ```

pub mod advisory;
pub mod error;
pub mod extract;
pub mod loader;
pub mod model;

pub use advisory::{advisories, Advisory};
pub use error::{Error, Result, ValueKind};
pub use extract::{extract_config, schema};
pub use loader::{load_config, load_text, parse_config};
pub use model::{
  Config, Convolve, Databases, Inputs, Lens, OutputImageSettings, Outputs, Physics,
};
