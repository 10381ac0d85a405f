//! Port for producing fresh task identifiers.

use crate::board::domain::TaskId;

/// Source of new, globally unique task ids.
///
/// The reducer never invents ids; callers draw one from a generator and the
/// reducer only guards against duplicates.
pub trait TaskIdGenerator: Send + Sync {
    /// Returns an id not handed out before.
    fn next_id(&self) -> TaskId;
}
