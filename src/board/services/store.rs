//! The state store: current snapshot plus the ordered transition log.

use crate::board::domain::{Action, AppState, apply};
use mockable::Clock;
use std::sync::Arc;
use tracing::debug;

/// One dispatched transition as recorded in the log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionRecord {
    /// Position in dispatch order, starting at 1.
    pub sequence: u64,
    /// The dispatched action.
    pub action: Action,
    /// Whether the action produced a new snapshot.
    pub changed: bool,
}

/// Holds the latest snapshot and applies transitions in dispatch order.
///
/// The store is the single writer. Each dispatch replaces the snapshot
/// wholesale before returning, so readers holding an earlier [`Arc`] keep a
/// complete, consistent value.
#[derive(Debug, Clone)]
pub struct BoardStore {
    snapshot: Arc<AppState>,
    log: Vec<TransitionRecord>,
}

impl BoardStore {
    /// Creates a store seeded with `initial`.
    #[must_use]
    pub fn new(initial: AppState) -> Self {
        Self {
            snapshot: Arc::new(initial),
            log: Vec::new(),
        }
    }

    /// Returns the current snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Arc<AppState> {
        Arc::clone(&self.snapshot)
    }

    /// Returns the transitions dispatched so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &[TransitionRecord] {
        &self.log
    }

    /// Applies `action` to the current snapshot and records it.
    ///
    /// Returns a copy of the record appended to the log.
    pub fn dispatch(&mut self, action: Action, clock: &impl Clock) -> TransitionRecord {
        let next = apply(&self.snapshot, &action, clock);
        let changed = !Arc::ptr_eq(&next, &self.snapshot);
        let sequence = self.log.last().map_or(1, |record| record.sequence + 1);
        debug!(sequence, kind = action.kind(), changed, "dispatched transition");

        self.snapshot = next;
        let record = TransitionRecord {
            sequence,
            action,
            changed,
        };
        self.log.push(record.clone());
        record
    }
}
