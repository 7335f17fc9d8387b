//! # ecoroute-routing
//!
//! Decides where a user lands after onboarding, and what the landing page
//! says about itself, from the role and industry on their profile.
//!
//! Handles:
//! - **Table**: Compile-time role × industry route and description cells.
//! - **Resolver**: Path, title, and description resolution with fallbacks.
//! - **Profile**: The user-metadata boundary that feeds the resolver.
//!
//! # Example
//!
//! ```rust
//! use ecoroute_routing::resolver::resolve_dashboard_path;
//!
//! let path = resolve_dashboard_path(Some("ESG Officer"), Some("Manufacturing"));
//! assert_eq!(path, "/workspace/esg-integration");
//! ```

pub mod profile;
pub mod resolver;
pub mod table;
