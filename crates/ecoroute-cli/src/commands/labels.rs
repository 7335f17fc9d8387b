//! `ecoroute labels` — List recognised role labels and industry keys.

use clap::Args;
use ecoroute_common::types::{Industry, Role};

/// Arguments for the `labels` command.
#[derive(Args, Debug)]
pub struct LabelsArgs {
    /// Print as a JSON object instead of plain lists.
    #[arg(long)]
    pub json: bool,
}

/// Executes the `labels` command.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn execute(args: &LabelsArgs) -> anyhow::Result<()> {
    if args.json {
        let labels = serde_json::json!({
            "roles": Role::ALL,
            "industries": Industry::ALL,
        });
        println!("{}", serde_json::to_string_pretty(&labels)?);
        return Ok(());
    }

    println!("Roles (matched exactly):");
    for role in Role::ALL {
        println!("  {role}");
    }
    println!();
    println!("Industries (matched ignoring case):");
    for industry in Industry::ALL {
        println!("  {industry}");
    }
    Ok(())
}
