//! Tests for the task id generators.

use crate::board::adapters::{FallbackTaskIds, TimestampTaskIds, UuidTaskIds};
use crate::board::domain::TaskId;
use crate::board::ports::TaskIdGenerator;
use chrono::{DateTime, Local, Utc};
use mockable::{Clock, DefaultClock};
use rstest::rstest;
use std::collections::{HashSet, VecDeque};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Clock replaying a fixed sequence of millisecond timestamps.
struct ScriptedClock {
    millis: Mutex<VecDeque<i64>>,
}

impl ScriptedClock {
    fn new(millis: &[i64]) -> Self {
        Self {
            millis: Mutex::new(millis.iter().copied().collect()),
        }
    }
}

impl Clock for ScriptedClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        let millis = self
            .millis
            .lock()
            .expect("clock lock")
            .pop_front()
            .expect("scripted time available");
        DateTime::from_timestamp_millis(millis).expect("valid timestamp")
    }
}

fn distinct<G: TaskIdGenerator>(ids: &G, count: usize) -> HashSet<TaskId> {
    (0..count).map(|_| ids.next_id()).collect()
}

#[rstest]
fn uuid_ids_are_distinct_and_parse() {
    let ids = distinct(&UuidTaskIds, 256);

    assert_eq!(ids.len(), 256);
    assert!(
        ids.iter()
            .all(|id| uuid::Uuid::parse_str(id.as_str()).is_ok())
    );
}

#[rstest]
fn timestamp_ids_stay_distinct_within_one_millisecond() {
    let generator = TimestampTaskIds::new(Arc::new(DefaultClock));

    let ids = distinct(&generator, 64);

    assert_eq!(ids.len(), 64);
    assert!(
        ids.iter()
            .all(|id| id.as_str().chars().all(|c| c.is_ascii_digit()))
    );
}

#[rstest]
fn timestamp_ids_never_repeat_when_clock_steps_back() {
    let generator = TimestampTaskIds::new(Arc::new(ScriptedClock::new(&[
        1000, 2000, 1000, 2000, 5000,
    ])));

    let ids: Vec<String> = (0..5).map(|_| generator.next_id().into_inner()).collect();

    assert_eq!(ids, ["1000", "2000", "2001", "2002", "5000"]);
}

#[rstest]
fn timestamp_ids_are_unique_across_threads() {
    let generator = TimestampTaskIds::new(Arc::new(DefaultClock));

    let ids: Vec<TaskId> = std::thread::scope(|scope| {
        let workers: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| (0..64).map(|_| generator.next_id()).collect::<Vec<_>>()))
            .collect();
        workers
            .into_iter()
            .flat_map(|worker| worker.join().expect("worker joins"))
            .collect()
    });

    let unique: HashSet<&TaskId> = ids.iter().collect();
    assert_eq!(unique.len(), 8 * 64);
}

#[rstest]
fn fallback_is_used_only_when_primary_yields_nothing() {
    let available = AtomicBool::new(true);
    let generator = FallbackTaskIds::new(
        || {
            available
                .swap(false, Ordering::SeqCst)
                .then(|| TaskId::new("primary").expect("valid id"))
        },
        TimestampTaskIds::new(Arc::new(DefaultClock)),
    );

    let first = generator.next_id();
    let second = generator.next_id();

    assert_eq!(first, "primary");
    assert_ne!(second, "primary");
    assert!(!second.as_str().is_empty());
}
