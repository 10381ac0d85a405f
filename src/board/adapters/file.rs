//! File-backed snapshot store.
//!
//! Each key maps to `<key>.json` inside a single directory opened through
//! `cap-std`, so the store cannot reach outside that directory. Writes go to
//! a temporary sibling first and are renamed into place.

use crate::board::ports::{SnapshotStore, SnapshotStoreError, SnapshotStoreResult, StorageKey};
use async_trait::async_trait;
use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::io::{self, ErrorKind};
use std::sync::Arc;
use tracing::debug;

/// Snapshot store writing one JSON file per key.
#[derive(Debug, Clone)]
pub struct FileSnapshotStore {
    dir: Arc<Dir>,
}

impl FileSnapshotStore {
    /// Opens (creating if needed) the storage directory at `path`.
    ///
    /// The parent of `path` must already exist.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotStoreError::Persistence`] when the directory cannot
    /// be created or opened.
    pub fn open(path: &Utf8Path) -> SnapshotStoreResult<Self> {
        let name = path.file_name().ok_or_else(|| {
            SnapshotStoreError::persistence(io::Error::other(format!(
                "storage path '{path}' must name a directory"
            )))
        })?;
        let parent = path
            .parent()
            .filter(|parent| !parent.as_str().is_empty())
            .unwrap_or_else(|| Utf8Path::new("."));
        let parent_dir = Dir::open_ambient_dir(parent, ambient_authority())
            .map_err(SnapshotStoreError::persistence)?;
        parent_dir
            .create_dir_all(name)
            .map_err(SnapshotStoreError::persistence)?;
        let dir = parent_dir
            .open_dir(name)
            .map_err(SnapshotStoreError::persistence)?;
        debug!(%path, "opened snapshot directory");
        Ok(Self::from_dir(dir))
    }

    /// Wraps an already opened directory.
    #[must_use]
    pub fn from_dir(dir: Dir) -> Self {
        Self { dir: Arc::new(dir) }
    }
}

fn file_name(key: &StorageKey) -> String {
    format!("{key}.json")
}

fn temp_file_name(key: &StorageKey) -> String {
    format!("{key}.json.tmp")
}

/// Runs blocking filesystem work off the async executor threads.
async fn run_blocking<F, T>(f: F) -> SnapshotStoreResult<T>
where
    F: FnOnce() -> SnapshotStoreResult<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(SnapshotStoreError::persistence)?
}

#[async_trait]
impl SnapshotStore for FileSnapshotStore {
    async fn read(&self, key: &StorageKey) -> SnapshotStoreResult<Option<String>> {
        let dir = Arc::clone(&self.dir);
        let name = file_name(key);
        run_blocking(move || match dir.read_to_string(&name) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(file = %name, "snapshot slot is empty");
                Ok(None)
            }
            Err(err) => Err(SnapshotStoreError::persistence(err)),
        })
        .await
    }

    async fn write(&self, key: &StorageKey, contents: &str) -> SnapshotStoreResult<()> {
        let dir = Arc::clone(&self.dir);
        let name = file_name(key);
        let temp_name = temp_file_name(key);
        let payload = contents.to_owned();
        run_blocking(move || {
            dir.write(&temp_name, payload.as_bytes())
                .map_err(SnapshotStoreError::persistence)?;
            dir.rename(&temp_name, &dir, &name)
                .map_err(SnapshotStoreError::persistence)
        })
        .await
    }
}
