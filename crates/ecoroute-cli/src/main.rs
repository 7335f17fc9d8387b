//! # ecoroute — dashboard routing CLI
//!
//! Resolves where a user lands after onboarding from the role and
//! industry on their profile, and prints the routing tables.

mod commands;
mod output;

use std::path::{Path, PathBuf};

use clap::Parser;
use ecoroute_common::config::EcorouteConfig;
use ecoroute_common::constants::DEFAULT_CONFIG_FILE;
use tracing_subscriber::EnvFilter;

use crate::commands::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    commands::execute(cli, &config)
}

/// Loads the explicit config file, or `ecoroute.json` from the working
/// directory when present, or the built-in defaults.
fn load_config(explicit: Option<&Path>) -> anyhow::Result<EcorouteConfig> {
    if let Some(path) = explicit {
        return Ok(EcorouteConfig::load(path)?);
    }
    let local = PathBuf::from(DEFAULT_CONFIG_FILE);
    if local.is_file() {
        return Ok(EcorouteConfig::load(&local)?);
    }
    Ok(EcorouteConfig::default())
}
