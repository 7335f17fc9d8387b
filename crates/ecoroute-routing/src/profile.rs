//! User-metadata boundary.
//!
//! Profiles arrive as JSON written by the sign-up and onboarding flows.
//! Values are kept as raw strings so the title can echo them verbatim;
//! blank fields count as absent.

use std::path::Path;

use ecoroute_common::error::{EcorouteError, Result};
use ecoroute_common::types::{Industry, Role};
use serde::{Deserialize, Deserializer, Serialize};

use crate::resolver::{Dashboard, resolve_dashboard};

/// Role and industry as declared on a user's profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Declared job function.
    #[serde(default, deserialize_with = "non_blank")]
    pub role: Option<String>,
    /// Declared sector.
    #[serde(default, deserialize_with = "non_blank")]
    pub industry: Option<String>,
}

fn non_blank<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|v| !v.trim().is_empty()))
}

impl UserProfile {
    /// Creates a profile from optional raw values, dropping blank ones.
    #[must_use]
    pub fn new(role: Option<impl Into<String>>, industry: Option<impl Into<String>>) -> Self {
        let keep = |v: String| (!v.trim().is_empty()).then_some(v);
        Self {
            role: role.map(Into::into).and_then(keep),
            industry: industry.map(Into::into).and_then(keep),
        }
    }

    /// Parses a profile from user-metadata JSON. Unknown fields are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not a JSON object of the expected shape.
    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Reads and parses a profile file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_path(path: &Path) -> Result<Self> {
        tracing::debug!(path = %path.display(), "loading user profile");
        let content = std::fs::read_to_string(path).map_err(|source| EcorouteError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// Returns the role if it matches a declared label exactly.
    #[must_use]
    pub fn recognised_role(&self) -> Option<Role> {
        self.role.as_deref().and_then(Role::from_label)
    }

    /// Returns the industry if it matches a declared key, ignoring case.
    #[must_use]
    pub fn recognised_industry(&self) -> Option<Industry> {
        self.industry.as_deref().and_then(Industry::from_label)
    }

    /// Resolves the landing dashboard for this profile.
    #[must_use]
    pub fn dashboard(&self) -> Dashboard {
        resolve_dashboard(self.role.as_deref(), self.industry.as_deref())
    }
}
