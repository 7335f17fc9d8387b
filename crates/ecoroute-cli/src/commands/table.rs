//! `ecoroute table` — Print the role × industry routing table.

use clap::Args;
use ecoroute_common::types::Role;
use ecoroute_routing::table::routing_matrix;

/// Arguments for the `table` command.
#[derive(Args, Debug)]
pub struct TableArgs {
    /// Only show rows for this role (exact label).
    #[arg(long)]
    pub role: Option<Role>,
}

/// Executes the `table` command.
///
/// # Errors
///
/// This command currently cannot fail.
#[allow(clippy::unnecessary_wraps)]
pub fn execute(args: &TableArgs) -> anyhow::Result<()> {
    let rows: Vec<Vec<String>> = routing_matrix()
        .filter(|(role, _, _)| args.role.is_none_or(|wanted| wanted == *role))
        .map(|(role, industry, route)| {
            vec![role.to_string(), industry.to_string(), route.to_string()]
        })
        .collect();

    tracing::info!(rows = rows.len(), "printing routing table");
    print!(
        "{}",
        crate::output::format_table(&["ROLE", "INDUSTRY", "ROUTE"], &rows)
    );
    Ok(())
}
