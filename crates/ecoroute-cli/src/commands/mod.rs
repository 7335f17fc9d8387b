//! CLI command definitions and dispatch.

pub mod labels;
pub mod resolve;
pub mod table;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use ecoroute_common::config::EcorouteConfig;
use ecoroute_common::constants::BIN_NAME;

/// ecoroute — role/industry dashboard routing.
#[derive(Parser, Debug)]
#[command(name = BIN_NAME, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,

    /// Path to a JSON configuration file.
    #[arg(long, global = true, env = "ECOROUTE_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve the landing dashboard for a role and industry.
    Resolve(resolve::ResolveArgs),
    /// Print the role × industry routing table.
    Table(table::TableArgs),
    /// List the recognised role labels and industry keys.
    Labels(labels::LabelsArgs),
}

/// Dispatches the parsed CLI command to its handler.
///
/// # Errors
///
/// Returns an error if the command execution fails.
pub fn execute(cli: Cli, config: &EcorouteConfig) -> anyhow::Result<()> {
    match cli.command {
        Command::Resolve(args) => resolve::execute(args, config),
        Command::Table(args) => table::execute(&args),
        Command::Labels(args) => labels::execute(&args),
    }
}
