//! Dashboard resolution from raw profile values.
//!
//! Every operation is total. Absent input yields the constant defaults,
//! and unrecognised input is absorbed by a two-stage fallback:
//!
//! 1. An unrecognised role is looked up as [`Role::Other`].
//! 2. A missing cell for the industry is retried as [`Industry::Other`]
//!    under the same role.
//!
//! If both stages miss, the constant default is returned.

use ecoroute_common::constants::{
    DASHBOARD_TITLE_SUFFIX, DEFAULT_DASHBOARD_DESCRIPTION, DEFAULT_DASHBOARD_PATH,
    DEFAULT_DASHBOARD_TITLE,
};
use ecoroute_common::types::{Industry, Role};
use serde::Serialize;

use crate::table::{description_cell, route_cell};

type Cell = fn(Role, Industry) -> Option<&'static str>;

/// A fully resolved landing dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dashboard {
    /// Route the navigation layer should open.
    pub path: &'static str,
    /// Page title.
    pub title: String,
    /// Role/industry specific copy.
    pub description: &'static str,
}

/// Resolves the route, title, and description in one call.
#[must_use]
pub fn resolve_dashboard(role: Option<&str>, industry: Option<&str>) -> Dashboard {
    Dashboard {
        path: resolve_dashboard_path(role, industry),
        title: resolve_dashboard_title(role, industry),
        description: resolve_dashboard_description(role, industry),
    }
}

/// Resolves the dashboard route for a role and industry.
///
/// The industry is matched case-insensitively, the role verbatim.
#[must_use]
pub fn resolve_dashboard_path(role: Option<&str>, industry: Option<&str>) -> &'static str {
    match (role, industry) {
        (Some(role), Some(industry)) => {
            lookup(role, industry, route_cell).unwrap_or(DEFAULT_DASHBOARD_PATH)
        }
        _ => DEFAULT_DASHBOARD_PATH,
    }
}

/// Formats the dashboard title as `"{industry} | {role} Dashboard"`.
///
/// Both values are echoed exactly as supplied, recognised or not.
#[must_use]
pub fn resolve_dashboard_title(role: Option<&str>, industry: Option<&str>) -> String {
    match (role, industry) {
        (Some(role), Some(industry)) => {
            format!("{industry} | {role} {DASHBOARD_TITLE_SUFFIX}")
        }
        _ => DEFAULT_DASHBOARD_TITLE.to_string(),
    }
}

/// Resolves the dashboard description for a role and industry.
#[must_use]
pub fn resolve_dashboard_description(role: Option<&str>, industry: Option<&str>) -> &'static str {
    match (role, industry) {
        (Some(role), Some(industry)) => {
            lookup(role, industry, description_cell).unwrap_or(DEFAULT_DASHBOARD_DESCRIPTION)
        }
        _ => DEFAULT_DASHBOARD_DESCRIPTION,
    }
}

fn lookup(role: &str, industry: &str, cell: Cell) -> Option<&'static str> {
    let role = Role::from_profile(role);
    let industry = Industry::from_profile(industry);
    cell(role, industry).or_else(|| cell(role, Industry::Other))
}
