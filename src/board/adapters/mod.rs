//! Adapter implementations for board ports.

pub mod file;
pub mod ids;
pub mod memory;

pub use file::FileSnapshotStore;
pub use ids::{FallbackTaskIds, TimestampTaskIds, UuidTaskIds};
pub use memory::InMemorySnapshotStore;
