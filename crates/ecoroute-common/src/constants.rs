//! System-wide constants and fallback copy.

/// Route used whenever role or industry is absent, or nothing else resolves.
pub const DEFAULT_DASHBOARD_PATH: &str = "/workspace/dashboard";

/// Title shown when role or industry is absent.
pub const DEFAULT_DASHBOARD_TITLE: &str = "Dashboard";

/// Description shown when role or industry is absent, or no entry resolves.
pub const DEFAULT_DASHBOARD_DESCRIPTION: &str = "Your personalized dashboard is ready.";

/// Suffix appended to the role in a resolved dashboard title.
pub const DASHBOARD_TITLE_SUFFIX: &str = "Dashboard";

/// Default log filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Default configuration file name looked up by the CLI.
pub const DEFAULT_CONFIG_FILE: &str = "ecoroute.json";

/// Binary name for the CLI.
pub const BIN_NAME: &str = "ecoroute";
