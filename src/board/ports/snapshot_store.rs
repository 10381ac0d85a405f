//! Persistence port: a key-value slot holding one serialized snapshot.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Result type for snapshot store operations.
pub type SnapshotStoreResult<T> = Result<T, SnapshotStoreError>;

/// Durable key-value slot for serialized snapshots.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Reads the value stored under `key`.
    ///
    /// Returns `None` when the slot has never been written.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotStoreError::Persistence`] when the backing store
    /// cannot be read.
    async fn read(&self, key: &StorageKey) -> SnapshotStoreResult<Option<String>>;

    /// Replaces the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotStoreError::Persistence`] when the backing store
    /// cannot be written.
    async fn write(&self, key: &StorageKey, contents: &str) -> SnapshotStoreResult<()>;
}

/// Errors returned by snapshot store implementations.
#[derive(Debug, Clone, Error)]
pub enum SnapshotStoreError {
    /// Storage-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl SnapshotStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}

/// Name of a storage slot.
///
/// Keys double as file names in file-backed stores, so they are restricted to
/// ASCII alphanumerics, `-`, `_` and `.`, and may not start with `.`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StorageKey(String);

/// Error returned for a malformed storage key.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid storage key '{0}'")]
pub struct InvalidStorageKey(pub String);

impl StorageKey {
    /// Key used when none is configured.
    pub const DEFAULT: &'static str = "kanban-state";

    /// Creates a validated storage key.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidStorageKey`] when the key is empty, starts with `.`,
    /// or contains other characters than ASCII alphanumerics, `-`, `_`, `.`.
    pub fn new(value: impl Into<String>) -> Result<Self, InvalidStorageKey> {
        let raw = value.into();
        let is_valid = !raw.is_empty()
            && !raw.starts_with('.')
            && raw
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
        if !is_valid {
            return Err(InvalidStorageKey(raw));
        }
        Ok(Self(raw))
    }

    /// Returns the key as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for StorageKey {
    fn default() -> Self {
        Self(Self::DEFAULT.to_owned())
    }
}

impl TryFrom<String> for StorageKey {
    type Error = InvalidStorageKey;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<StorageKey> for String {
    fn from(value: StorageKey) -> Self {
        value.0
    }
}

impl AsRef<str> for StorageKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
