//! Task id generators.

use crate::board::domain::TaskId;
use crate::board::ports::TaskIdGenerator;
use mockable::Clock;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Generates random v4 UUID task ids.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidTaskIds;

impl TaskIdGenerator for UuidTaskIds {
    fn next_id(&self) -> TaskId {
        TaskId::from_trusted(Uuid::new_v4().to_string())
    }
}

/// Generates ids from the clock's millisecond timestamp.
///
/// Ids from one generator are strictly increasing: a request in the same
/// millisecond as the previous one, or after the clock stepped back, takes
/// the previous value plus one.
#[derive(Debug)]
pub struct TimestampTaskIds<C: Clock> {
    clock: Arc<C>,
    last_issued: AtomicU64,
}

impl<C: Clock> TimestampTaskIds<C> {
    /// Creates a generator reading time from `clock`.
    #[must_use]
    pub const fn new(clock: Arc<C>) -> Self {
        Self {
            clock,
            last_issued: AtomicU64::new(0),
        }
    }
}

impl<C: Clock + Send + Sync> TaskIdGenerator for TimestampTaskIds<C> {
    fn next_id(&self) -> TaskId {
        let now = u64::try_from(self.clock.utc().timestamp_millis()).unwrap_or_default();
        let advance = |last: u64| Some(now.max(last.saturating_add(1)));
        // The closure never returns `None`, so both arms carry the prior value.
        let previous = match self
            .last_issued
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, advance)
        {
            Ok(last) | Err(last) => last,
        };
        let issued = now.max(previous.saturating_add(1));
        TaskId::from_trusted(issued.to_string())
    }
}

/// Uses a primary generator and falls back to another when it yields
/// nothing.
pub struct FallbackTaskIds<P, F> {
    primary: P,
    fallback: F,
}

impl<P, F> FallbackTaskIds<P, F>
where
    P: Fn() -> Option<TaskId> + Send + Sync,
    F: TaskIdGenerator,
{
    /// Creates a generator trying `primary` first.
    #[must_use]
    pub const fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }
}

impl<P, F> TaskIdGenerator for FallbackTaskIds<P, F>
where
    P: Fn() -> Option<TaskId> + Send + Sync,
    F: TaskIdGenerator,
{
    fn next_id(&self) -> TaskId {
        (self.primary)().unwrap_or_else(|| self.fallback.next_id())
    }
}
