use super::{default_log_path, ConfigError};
use crate::shared::logging::EventLog;
use crate::telemetry::snippets::DEFAULT_TRACKING_ID;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_COPY_INDICATOR_MS: u64 = 2000;
pub const MAX_COPY_INDICATOR_MS: u64 = 60_000;

fn default_copy_indicator_ms() -> u64 {
    DEFAULT_COPY_INDICATOR_MS
}

fn default_tracking_id() -> String {
    DEFAULT_TRACKING_ID.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_path: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invite_endpoint: Option<String>,
    #[serde(default = "default_copy_indicator_ms")]
    pub copy_indicator_ms: u64,
    #[serde(default = "default_tracking_id")]
    pub tracking_id: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_path: None,
            invite_endpoint: None,
            copy_indicator_ms: DEFAULT_COPY_INDICATOR_MS,
            tracking_id: default_tracking_id(),
        }
    }
}

impl Settings {
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        serde_yaml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Reads `path` when it exists; a missing file yields the defaults.
    pub fn from_path_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::from_path(path)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(log_path) = &self.log_path {
            if !log_path.is_absolute() {
                return Err(ConfigError::Invalid(
                    "`log_path` must be an absolute path".to_string(),
                ));
            }
        }
        if let Some(endpoint) = &self.invite_endpoint {
            let endpoint = endpoint.trim();
            if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
                return Err(ConfigError::Invalid(format!(
                    "`invite_endpoint` must start with http:// or https://, got `{endpoint}`"
                )));
            }
        }
        if !(1..=MAX_COPY_INDICATOR_MS).contains(&self.copy_indicator_ms) {
            return Err(ConfigError::Invalid(format!(
                "`copy_indicator_ms` must be between 1 and {MAX_COPY_INDICATOR_MS}"
            )));
        }
        if self.tracking_id.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "`tracking_id` must be non-empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn resolve_log_path(&self) -> Result<PathBuf, ConfigError> {
        match &self.log_path {
            Some(path) => Ok(path.clone()),
            None => default_log_path(),
        }
    }

    /// Event log for wizard sessions. Without a resolvable path events are
    /// dropped.
    pub fn event_log(&self) -> EventLog {
        match self.resolve_log_path() {
            Ok(path) => EventLog::to_file(path),
            Err(_) => EventLog::disabled(),
        }
    }

    pub fn copy_indicator(&self) -> Duration {
        Duration::from_millis(self.copy_indicator_ms)
    }

    pub fn invite_endpoint(&self) -> Option<&str> {
        self.invite_endpoint
            .as_deref()
            .map(str::trim)
            .filter(|endpoint| !endpoint.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn empty_document_uses_defaults() {
        let settings: Settings = serde_yaml::from_str("{}").expect("parse settings");
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.copy_indicator(), Duration::from_millis(2000));
        assert_eq!(settings.tracking_id, "TS-XXXXX");
        settings.validate().expect("defaults are valid");
    }

    #[test]
    fn validation_rejects_relative_log_path_and_bad_endpoint() {
        let settings = Settings {
            log_path: Some(PathBuf::from("logs/events.log")),
            ..Settings::default()
        };
        let err = settings.validate().expect_err("relative log path");
        assert!(err.to_string().contains("log_path"));

        let settings = Settings {
            invite_endpoint: Some("ftp://invites".to_string()),
            ..Settings::default()
        };
        let err = settings.validate().expect_err("bad endpoint");
        assert!(err.to_string().contains("invite_endpoint"));
    }

    #[test]
    fn validation_bounds_copy_indicator() {
        for value in [0, MAX_COPY_INDICATOR_MS + 1] {
            let settings = Settings {
                copy_indicator_ms: value,
                ..Settings::default()
            };
            assert!(matches!(settings.validate(), Err(ConfigError::Invalid(_))));
        }
    }

    #[test]
    fn missing_file_yields_defaults_and_unknown_fields_fail() {
        let temp = tempdir().expect("temp dir");
        let path = temp.path().join("settings.yaml");
        let settings = Settings::from_path_or_default(&path).expect("defaults");
        assert_eq!(settings, Settings::default());

        fs::write(&path, "tracking_id: TS-1\ncolour: blue\n").expect("write settings");
        let err = Settings::from_path(&path).expect_err("unknown field");
        match err {
            ConfigError::Parse { path: reported, .. } => {
                assert!(reported.ends_with("settings.yaml"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
