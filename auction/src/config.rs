//! Engine configuration with TOML file support.

use sealbid_types::{AccountId, AuctionParams, ParamsError};
use sealbid_utils::LogFormat;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error(transparent)]
    Params(#[from] ParamsError),
}

/// Configuration for an [`AuctionEngine`](crate::AuctionEngine).
///
/// Can be loaded from a TOML file via [`AuctionConfig::from_toml_file`] or
/// built programmatically (e.g. for tests).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuctionConfig {
    /// The only account allowed to set vendor reputation directly.
    /// `None` disables the operation.
    #[serde(default)]
    pub admin: Option<AccountId>,

    /// Log format: "human" or "json".
    #[serde(default = "default_log_format")]
    pub log_format: String,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub params: AuctionParams,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_log_format() -> String {
    "human".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AuctionConfig {
    fn default() -> Self {
        Self {
            admin: None,
            log_format: default_log_format(),
            log_level: default_log_level(),
            params: AuctionParams::default(),
        }
    }
}

impl AuctionConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.params.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Install the tracing subscriber described by this config.
    pub fn init_logging(&self) {
        sealbid_utils::init_tracing(LogFormat::parse(&self.log_format), &self.log_level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_document_uses_defaults() {
        let config = AuctionConfig::from_toml_str("").unwrap();
        assert_eq!(config, AuctionConfig::default());
    }

    #[test]
    fn partial_params_keep_other_defaults() {
        let config = AuctionConfig::from_toml_str(
            r#"
            admin = "registry-admin"
            log_format = "json"

            [params]
            max_candidates = 8
            "#,
        )
        .unwrap();
        assert_eq!(config.admin, Some(AccountId::new("registry-admin")));
        assert_eq!(config.log_format, "json");
        assert_eq!(config.params.max_candidates, 8);
        assert_eq!(config.params.weight_step, 100);
        assert_eq!(config.params.max_score, 100);
    }

    #[test]
    fn invalid_params_rejected() {
        let err = AuctionConfig::from_toml_str("[params]\nweight_step = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Params(ParamsError::ZeroWeightStep)));
    }

    #[test]
    fn malformed_toml_rejected() {
        assert!(matches!(
            AuctionConfig::from_toml_str("admin = "),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "log_level = \"debug\"").unwrap();
        let config = AuctionConfig::from_toml_file(file.path()).unwrap();
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn init_logging_is_idempotent() {
        let config =
            AuctionConfig::from_toml_str("log_format = \"json\"\nlog_level = \"warn\"\n")
                .unwrap();
        config.init_logging();
        config.init_logging();
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = AuctionConfig::from_toml_file(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
