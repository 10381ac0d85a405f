//! Port contracts for the board.
//!
//! Ports define infrastructure-agnostic interfaces used by board services.

pub mod id_generator;
pub mod snapshot_store;

pub use id_generator::TaskIdGenerator;
#[cfg(test)]
pub use snapshot_store::MockSnapshotStore;
pub use snapshot_store::{
    InvalidStorageKey, SnapshotStore, SnapshotStoreError, SnapshotStoreResult, StorageKey,
};
