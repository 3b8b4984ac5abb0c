//! Ingestion settings loaded from a config file.
//!
//! `.json` files carry the flat credential layout
//! `{"alpha_vantage_key": "...", "eia_key": "..."}`; any other extension is
//! read as TOML with the same keys plus optional `timeout_secs` and a
//! `[pacing]` table.

use std::path::{Path, PathBuf};
use std::time::Duration;

use gridmon_core::config::{Credentials, Pacing};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    NotFound(PathBuf),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("missing credential `{0}`")]
    MissingCredential(&'static str),
}

/// Everything an ingestion run needs besides its output paths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngestConfig {
    #[serde(flatten)]
    pub credentials: Credentials,

    #[serde(default)]
    pub pacing: Pacing,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl IngestConfig {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            pacing: Pacing::default(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Load and validate a config file, picking the format by extension.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let parsed = if is_json {
            serde_json::from_str::<Self>(&text).map_err(|e| e.to_string())
        } else {
            toml::from_str::<Self>(&text).map_err(|e| e.to_string())
        };

        let config = parsed.map_err(|message| ConfigError::Parse {
            path: path.to_path_buf(),
            message,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject blank credentials.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.credentials.alpha_vantage_key.trim().is_empty() {
            return Err(ConfigError::MissingCredential("alpha_vantage_key"));
        }
        if self.credentials.eia_key.trim().is_empty() {
            return Err(ConfigError::MissingCredential("eia_key"));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write(dir: &tempfile::TempDir, name: &str, body: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(body.as_bytes()).unwrap();
        path
    }

    #[test]
    fn flat_json_layout() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            &dir,
            "config.json",
            r#"{"alpha_vantage_key": "AV", "eia_key": "EIA"}"#,
        );
        let config = IngestConfig::from_file(&path).unwrap();
        assert_eq!(config.credentials.alpha_vantage_key, "AV");
        assert_eq!(config.credentials.eia_key, "EIA");
        assert_eq!(config.pacing, Pacing::default());
        assert_eq!(config.timeout(), Duration::from_secs(15));
    }

    #[test]
    fn toml_with_pacing_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            &dir,
            "gridmon.toml",
            "alpha_vantage_key = \"AV\"\neia_key = \"EIA\"\ntimeout_secs = 5\n\n[pacing]\nquote_ms = 1200\n",
        );
        let config = IngestConfig::from_file(&path).unwrap();
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.pacing.quote_ms, 1200);
        assert_eq!(config.pacing.grid_ms, 500);
    }

    #[test]
    fn blank_or_absent_credentials_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "config.json", r#"{"alpha_vantage_key": "AV", "eia_key": "  "}"#);
        assert!(matches!(
            IngestConfig::from_file(&path),
            Err(ConfigError::MissingCredential("eia_key"))
        ));

        let path = write(&dir, "other.json", r#"{"eia_key": "EIA"}"#);
        assert!(matches!(
            IngestConfig::from_file(&path),
            Err(ConfigError::MissingCredential("alpha_vantage_key"))
        ));
    }

    #[test]
    fn missing_and_malformed_files() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            IngestConfig::from_file(&dir.path().join("nope.json")),
            Err(ConfigError::NotFound(_))
        ));

        let path = write(&dir, "bad.toml", "alpha_vantage_key = ");
        assert!(matches!(
            IngestConfig::from_file(&path),
            Err(ConfigError::Parse { .. })
        ));
    }
}
