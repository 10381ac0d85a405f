//! Runtime configuration.
//!
//! Configuration is a small JSON document; every field is optional:
//!
//! ```json
//! { "storage_dir": ".kanban", "storage_key": "kanban-state", "log_filter": "info" }
//! ```

use crate::board::ports::StorageKey;
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use serde::{Deserialize, Serialize};
use std::env;
use thiserror::Error;

/// Environment variable naming the configuration file.
pub const CONFIG_PATH_ENV: &str = "KANBAN_CONFIG";

/// Environment variable overriding the log filter.
pub const LOG_FILTER_ENV: &str = "KANBAN_LOG";

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config '{path}': {source}")]
    Read {
        /// Path that was read.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The configuration file is not valid.
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    /// An environment variable holds a non-UTF-8 value.
    #[error("environment variable {0} is not valid UTF-8")]
    NonUtf8Env(&'static str),
}

/// Settings for the board service and its ambient stack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KanbanConfig {
    /// Directory holding persisted snapshots.
    pub storage_dir: Utf8PathBuf,
    /// Slot the snapshot is persisted under.
    pub storage_key: StorageKey,
    /// `tracing` filter directive, e.g. `info` or `kanban=debug`.
    pub log_filter: String,
}

impl Default for KanbanConfig {
    fn default() -> Self {
        Self {
            storage_dir: Utf8PathBuf::from(".kanban"),
            storage_key: StorageKey::default(),
            log_filter: "info".to_owned(),
        }
    }
}

impl KanbanConfig {
    /// Parses configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON, unknown fields, or
    /// an invalid storage key.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Reads configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] when the file cannot be read and
    /// [`ConfigError::Parse`] when its contents are invalid.
    pub fn load(path: &Utf8Path) -> Result<Self, ConfigError> {
        let read_error = |source| ConfigError::Read {
            path: path.to_owned(),
            source,
        };
        let file_name = path
            .file_name()
            .ok_or_else(|| read_error(std::io::Error::other("path must name a file")))?;
        let parent = path
            .parent()
            .filter(|parent| !parent.as_str().is_empty())
            .unwrap_or_else(|| Utf8Path::new("."));
        let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(read_error)?;
        let raw = dir.read_to_string(file_name).map_err(read_error)?;
        Self::from_json_str(&raw)
    }

    /// Loads the file named by `KANBAN_CONFIG` (defaults when unset) and
    /// applies the `KANBAN_LOG` override.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file cannot be loaded or a variable
    /// is not UTF-8.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = match read_env(CONFIG_PATH_ENV)? {
            Some(path) => Self::load(Utf8Path::new(&path))?,
            None => Self::default(),
        };
        if let Some(filter) = read_env(LOG_FILTER_ENV)? {
            config.log_filter = filter;
        }
        Ok(config)
    }
}

fn read_env(name: &'static str) -> Result<Option<String>, ConfigError> {
    env::var_os(name)
        .map(|value| value.into_string().map_err(|_| ConfigError::NonUtf8Env(name)))
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn defaults_point_at_local_storage() {
        let config = KanbanConfig::default();

        assert_eq!(config.storage_dir, Utf8PathBuf::from(".kanban"));
        assert_eq!(config.storage_key.as_ref(), "kanban-state");
        assert_eq!(config.log_filter, "info");
    }

    #[rstest]
    fn partial_document_keeps_remaining_defaults() {
        let config = KanbanConfig::from_json_str(r#"{"storage_key":"team-board"}"#)
            .expect("valid config");

        assert_eq!(config.storage_key.as_ref(), "team-board");
        assert_eq!(config.storage_dir, KanbanConfig::default().storage_dir);
    }

    #[rstest]
    #[case::unknown_field(r#"{"storage":"x"}"#)]
    #[case::invalid_key(r#"{"storage_key":"../escape"}"#)]
    #[case::blank_key(r#"{"storage_key":""}"#)]
    #[case::not_json("storage_key = 1")]
    fn rejects_invalid_documents(#[case] raw: &str) {
        assert!(matches!(
            KanbanConfig::from_json_str(raw),
            Err(ConfigError::Parse(_))
        ));
    }

    #[rstest]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = Utf8PathBuf::from_path_buf(dir.path().join("absent.json"))
            .expect("utf-8 temp path");

        let err = KanbanConfig::load(&path).expect_err("file is absent");

        assert!(matches!(err, ConfigError::Read { path: p, .. } if p == path));
    }

    #[rstest]
    fn load_reads_file_contents() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = Utf8PathBuf::from_path_buf(dir.path().join("kanban.json"))
            .expect("utf-8 temp path");
        std::fs::write(&path, r#"{"log_filter":"kanban=debug"}"#).expect("write config");

        let config = KanbanConfig::load(&path).expect("config loads");

        assert_eq!(config.log_filter, "kanban=debug");
    }
}
