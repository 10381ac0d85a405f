//! In-memory snapshot store for tests and ephemeral sessions.

use crate::board::ports::{SnapshotStore, SnapshotStoreError, SnapshotStoreResult, StorageKey};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Thread-safe in-memory key-value slot store.
#[derive(Debug, Clone, Default)]
pub struct InMemorySnapshotStore {
    slots: Arc<RwLock<HashMap<StorageKey, String>>>,
}

impl InMemorySnapshotStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store with `contents` already written under `key`.
    #[must_use]
    pub fn with_slot(key: StorageKey, contents: impl Into<String>) -> Self {
        let slots = HashMap::from([(key, contents.into())]);
        Self {
            slots: Arc::new(RwLock::new(slots)),
        }
    }
}

fn poisoned(err: &impl ToString) -> SnapshotStoreError {
    SnapshotStoreError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl SnapshotStore for InMemorySnapshotStore {
    async fn read(&self, key: &StorageKey) -> SnapshotStoreResult<Option<String>> {
        let slots = self.slots.read().map_err(|err| poisoned(&err))?;
        Ok(slots.get(key).cloned())
    }

    async fn write(&self, key: &StorageKey, contents: &str) -> SnapshotStoreResult<()> {
        let mut slots = self.slots.write().map_err(|err| poisoned(&err))?;
        slots.insert(key.clone(), contents.to_owned());
        Ok(())
    }
}
