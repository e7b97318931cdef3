// src/main.rs
// `jedisim <config.toml>`: validates a simulation config and reports what it found.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use jedisim_config::{advisories, load_config, Config};

const LOG_ENV_VAR: &str = "JEDISIM_LOG";

/// Validates a jedisim simulation config file.
#[derive(Debug, Parser)]
#[command(name = "jedisim", version)]
struct Cli {
  /// Path to the simulation config file.
  config: PathBuf,
}

fn init_logging() {
  let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("warn"));
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .with_target(false)
    .init();
}

fn report(config: &Config) {
  tracing::info!(
    galaxies = config.inputs.num_galaxies,
    lenses = config.physics.lenses.len(),
    outputs = config.outputs.requested().len(),
    "configuration loaded"
  );
  for advisory in advisories(config) {
    tracing::warn!("{}", advisory);
  }
  match serde_json::to_string_pretty(config) {
    Ok(json) => tracing::debug!("validated configuration:\n{}", json),
    Err(e) => tracing::debug!(error = %e, "could not render configuration as JSON"),
  }
}

fn main() -> ExitCode {
  let cli = match Cli::try_parse() {
    Ok(cli) => cli,
    Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
      let _ = e.print();
      return ExitCode::SUCCESS;
    }
    Err(e) => {
      let _ = e.print();
      return ExitCode::FAILURE;
    }
  };

  init_logging();

  let config = match load_config(&cli.config) {
    Ok(config) => config,
    Err(e) => {
      eprintln!("ERROR: {}", e);
      return ExitCode::FAILURE;
    }
  };

  report(&config);
  config.release();
  ExitCode::SUCCESS
}
