//! Role and industry vocabularies used to key the dashboard tables.
//!
//! Both axes arrive as free-form profile strings. Each enum offers a strict
//! conversion (`from_label`, `FromStr`) and a lenient one (`from_profile`)
//! that absorbs unrecognised input into the catch-all `Other` variant.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EcorouteError;

/// Declared job function of a user.
///
/// Labels are matched verbatim. `"esg officer"` is not `"ESG Officer"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Role {
    /// Owns supplier relationships and logistics.
    #[serde(rename = "Supply Chain Manager")]
    SupplyChainManager,
    /// Owns ESG reporting and disclosure.
    #[serde(rename = "ESG Officer")]
    EsgOfficer,
    /// Owns emissions and sustainability strategy.
    #[serde(rename = "Sustainability Director")]
    SustainabilityDirector,
    /// Owns day-to-day operational risk.
    #[serde(rename = "Operations Manager")]
    OperationsManager,
    /// Owns regulatory compliance.
    #[serde(rename = "Compliance Officer")]
    ComplianceOfficer,
    /// Catch-all for any other job function.
    #[serde(rename = "Other")]
    Other,
}

impl Role {
    /// Every role, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::SupplyChainManager,
        Self::EsgOfficer,
        Self::SustainabilityDirector,
        Self::OperationsManager,
        Self::ComplianceOfficer,
        Self::Other,
    ];

    /// Returns the profile label for this role.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::SupplyChainManager => "Supply Chain Manager",
            Self::EsgOfficer => "ESG Officer",
            Self::SustainabilityDirector => "Sustainability Director",
            Self::OperationsManager => "Operations Manager",
            Self::ComplianceOfficer => "Compliance Officer",
            Self::Other => "Other",
        }
    }

    /// Matches a label exactly, without any case or whitespace normalization.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.label() == label)
    }

    /// Converts a raw profile value, mapping anything unrecognised to [`Role::Other`].
    #[must_use]
    pub fn from_profile(label: &str) -> Self {
        Self::from_label(label).unwrap_or(Self::Other)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Role {
    type Err = EcorouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| EcorouteError::UnknownRole {
            label: s.to_string(),
        })
    }
}

/// Sector a user's organisation operates in.
///
/// Keys are lower-case; lookups lower-case the caller's value first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Industry {
    /// Manufacturing and industrial production.
    Manufacturing,
    /// Retail and consumer goods.
    Retail,
    /// Technology and software.
    Technology,
    /// Healthcare and life sciences.
    Healthcare,
    /// Energy and utilities.
    Energy,
    /// Agriculture and food production.
    Agriculture,
    /// Financial services.
    Finance,
    /// Catch-all for any other sector.
    Other,
}

impl Industry {
    /// Every industry, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::Manufacturing,
        Self::Retail,
        Self::Technology,
        Self::Healthcare,
        Self::Energy,
        Self::Agriculture,
        Self::Finance,
        Self::Other,
    ];

    /// Returns the lower-case key for this industry.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Manufacturing => "manufacturing",
            Self::Retail => "retail",
            Self::Technology => "technology",
            Self::Healthcare => "healthcare",
            Self::Energy => "energy",
            Self::Agriculture => "agriculture",
            Self::Finance => "finance",
            Self::Other => "other",
        }
    }

    /// Lower-cases `label` and matches it against the industry keys.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        let normalized = label.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|industry| industry.key() == normalized)
    }

    /// Converts a raw profile value, mapping anything unrecognised to [`Industry::Other`].
    #[must_use]
    pub fn from_profile(label: &str) -> Self {
        Self::from_label(label).unwrap_or(Self::Other)
    }
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Industry {
    type Err = EcorouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| EcorouteError::UnknownIndustry {
            label: s.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_labels_round_trip_through_from_label() {
        for role in Role::ALL {
            assert_eq!(Role::from_label(role.label()), Some(role));
        }
    }

    #[test]
    fn role_matching_is_case_sensitive() {
        assert_eq!(Role::from_label("esg officer"), None);
        assert_eq!(Role::from_label("ESG Officer "), None);
        assert_eq!(Role::from_profile("esg officer"), Role::Other);
    }

    #[test]
    fn role_from_str_rejects_unknown_label() {
        let err = "Chief Wizard".parse::<Role>().expect_err("should reject");
        assert!(matches!(err, EcorouteError::UnknownRole { ref label } if label == "Chief Wizard"));
    }

    #[test]
    fn role_serializes_as_label() {
        let json = serde_json::to_string(&Role::EsgOfficer).expect("serialize");
        assert_eq!(json, "\"ESG Officer\"");
        let back: Role = serde_json::from_str("\"Supply Chain Manager\"").expect("deserialize");
        assert_eq!(back, Role::SupplyChainManager);
    }

    #[test]
    fn industry_matching_ignores_case() {
        assert_eq!(Industry::from_label("Manufacturing"), Some(Industry::Manufacturing));
        assert_eq!(Industry::from_label("RETAIL"), Some(Industry::Retail));
        assert_eq!(Industry::from_label("other"), Some(Industry::Other));
    }

    #[test]
    fn industry_does_not_trim_whitespace() {
        assert_eq!(Industry::from_label(" retail"), None);
        assert_eq!(Industry::from_profile(" retail"), Industry::Other);
    }

    #[test]
    fn industry_from_profile_absorbs_unknown_sector() {
        assert_eq!(Industry::from_profile("aerospace"), Industry::Other);
    }

    #[test]
    fn industry_from_str_rejects_unknown_label() {
        assert!("aerospace".parse::<Industry>().is_err());
        assert_eq!("Energy".parse::<Industry>().ok(), Some(Industry::Energy));
    }

    #[test]
    fn industry_display_is_lowercase_key() {
        assert_eq!(Industry::Healthcare.to_string(), "healthcare");
        assert_eq!(Role::OperationsManager.to_string(), "Operations Manager");
    }
}
