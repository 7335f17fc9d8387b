//! Global configuration model for the ecoroute CLI.
//!
//! The routing tables are compiled in and are not configurable. This model
//! only covers presentation concerns around them.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{EcorouteError, Result};

/// Output format for resolved dashboards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable key/value lines.
    #[default]
    Text,
    /// A single JSON object.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = EcorouteError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(EcorouteError::Config {
                message: format!("unsupported output format: {other}"),
            }),
        }
    }
}

/// Root configuration for the ecoroute CLI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EcorouteConfig {
    /// Default output format for `resolve`.
    pub output: OutputFormat,
    /// Log filter applied when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for EcorouteConfig {
    fn default() -> Self {
        Self {
            output: OutputFormat::default(),
            log_filter: crate::constants::DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl EcorouteConfig {
    /// Loads a configuration file from disk.
    ///
    /// Missing keys take their default values.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid JSON,
    /// or carries an empty log filter.
    pub fn load(path: &Path) -> Result<Self> {
        tracing::debug!(path = %path.display(), "loading configuration");
        let content = std::fs::read_to_string(path).map_err(|source| EcorouteError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.log_filter.trim().is_empty() {
            return Err(EcorouteError::Config {
                message: "log_filter must not be empty".into(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(content.as_bytes()).expect("write config");
        file
    }

    #[test]
    fn default_config_uses_text_output() {
        let config = EcorouteConfig::default();
        assert_eq!(config.output, OutputFormat::Text);
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn load_full_config() {
        let file = write_config(r#"{ "output": "json", "log_filter": "ecoroute=debug" }"#);
        let config = EcorouteConfig::load(file.path()).expect("should load");
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.log_filter, "ecoroute=debug");
    }

    #[test]
    fn load_partial_config_fills_defaults() {
        let file = write_config(r#"{ "output": "json" }"#);
        let config = EcorouteConfig::load(file.path()).expect("should load");
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn load_rejects_unknown_keys() {
        let file = write_config(r#"{ "routes": {} }"#);
        let err = EcorouteConfig::load(file.path()).expect_err("should reject");
        assert!(matches!(err, EcorouteError::Serialization { .. }));
    }

    #[test]
    fn load_rejects_empty_log_filter() {
        let file = write_config(r#"{ "log_filter": "  " }"#);
        let err = EcorouteConfig::load(file.path()).expect_err("should reject");
        assert!(matches!(err, EcorouteError::Config { .. }));
    }

    #[test]
    fn load_missing_file_reports_path() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("missing.json");
        let err = EcorouteConfig::load(&path).expect_err("should fail");
        match err {
            EcorouteError::Io { path: p, .. } => assert_eq!(p, path),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn output_format_parses_known_values() {
        assert_eq!("json".parse::<OutputFormat>().ok(), Some(OutputFormat::Json));
        assert!("yaml".parse::<OutputFormat>().is_err());
    }
}
