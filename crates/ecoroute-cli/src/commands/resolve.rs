//! `ecoroute resolve` — Resolve the landing dashboard for a profile.

use std::path::PathBuf;

use clap::Args;
use ecoroute_common::config::{EcorouteConfig, OutputFormat};
use ecoroute_routing::profile::UserProfile;

/// Arguments for the `resolve` command.
#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Role label as declared on the profile (matched verbatim).
    #[arg(long)]
    pub role: Option<String>,

    /// Industry as declared on the profile (matched ignoring case).
    #[arg(long)]
    pub industry: Option<String>,

    /// Read role and industry from a profile JSON file instead.
    #[arg(long, conflicts_with_all = ["role", "industry"])]
    pub profile: Option<PathBuf>,

    /// Output format (`text` or `json`); defaults to the configured format.
    #[arg(long)]
    pub format: Option<OutputFormat>,
}

/// Executes the `resolve` command.
///
/// Missing or unrecognised values never fail; they resolve to fallback
/// dashboards and are only reported in the debug log.
///
/// # Errors
///
/// Returns an error if the profile file cannot be read or the output
/// cannot be rendered.
pub fn execute(args: ResolveArgs, config: &EcorouteConfig) -> anyhow::Result<()> {
    let profile = match args.profile {
        Some(ref path) => UserProfile::from_path(path)?,
        None => UserProfile::new(args.role, args.industry),
    };

    if profile.role.is_some() && profile.recognised_role().is_none() {
        tracing::debug!(role = ?profile.role, "unrecognised role, using fallback");
    }
    if profile.industry.is_some() && profile.recognised_industry().is_none() {
        tracing::debug!(industry = ?profile.industry, "unrecognised industry, using fallback");
    }

    let dashboard = profile.dashboard();
    tracing::info!(path = dashboard.path, "resolved dashboard");

    let format = args.format.unwrap_or(config.output);
    println!("{}", crate::output::render_dashboard(&dashboard, format)?);
    Ok(())
}
