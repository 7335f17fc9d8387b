//! Unified error types for the ecoroute workspace.
//!
//! Resolution itself never fails. These variants cover the edges around it:
//! reading profile and config files, and strict label parsing.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type shared across the workspace.
#[derive(Debug, Error)]
pub enum EcorouteError {
    /// An I/O operation failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path where the I/O error occurred.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A configuration value is invalid.
    #[error("invalid configuration: {message}")]
    Config {
        /// Description of the invalid configuration.
        message: String,
    },

    /// A role label is not part of the declared role set.
    #[error("unknown role: \"{label}\"")]
    UnknownRole {
        /// The label as supplied by the caller.
        label: String,
    },

    /// An industry label is not part of the declared industry set.
    #[error("unknown industry: \"{label}\"")]
    UnknownIndustry {
        /// The label as supplied by the caller.
        label: String,
    },

    /// Serialization or deserialization failed.
    #[error("serialization error: {source}")]
    Serialization {
        /// Underlying serialization error.
        #[from]
        source: serde_json::Error,
    },
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, EcorouteError>;
