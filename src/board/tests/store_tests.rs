//! Tests for the state store and its transition log.

use super::{board_with, column_id, ids_in, task, task_id};
use crate::board::domain::Action;
use crate::board::services::BoardStore;
use mockable::DefaultClock;
use rstest::{fixture, rstest};
use std::sync::Arc;

#[fixture]
fn store() -> BoardStore {
    BoardStore::new(board_with(&[("a", &["t1"]), ("b", &[])]).as_ref().clone())
}

#[rstest]
fn dispatch_replaces_snapshot_and_logs_in_order(mut store: BoardStore) {
    let first = store.dispatch(
        Action::AddTask {
            column_id: column_id("a"),
            task: task("t2"),
        },
        &DefaultClock,
    );
    let second = store.dispatch(
        Action::DeleteTask {
            task_id: task_id("t1"),
            column_id: column_id("a"),
        },
        &DefaultClock,
    );

    assert_eq!((first.sequence, first.changed), (1, true));
    assert_eq!((second.sequence, second.changed), (2, true));
    assert_eq!(ids_in(&store.snapshot(), "a"), ["t2"]);
    let kinds: Vec<&str> = store
        .history()
        .iter()
        .map(|record| record.action.kind())
        .collect();
    assert_eq!(kinds, ["ADD_TASK", "DELETE_TASK"]);
}

#[rstest]
fn noop_dispatch_is_logged_but_keeps_snapshot(mut store: BoardStore) {
    let before = store.snapshot();

    let record = store.dispatch(
        Action::AddTask {
            column_id: column_id("missing"),
            task: task("t2"),
        },
        &DefaultClock,
    );

    assert!(!record.changed);
    assert!(Arc::ptr_eq(&before, &store.snapshot()));
    assert_eq!(store.history().len(), 1);
}

#[rstest]
fn readers_keep_their_snapshot_after_later_dispatches(mut store: BoardStore) {
    let held = store.snapshot();

    store.dispatch(
        Action::MoveTask {
            task_id: task_id("t1"),
            from_column_id: column_id("a"),
            to_column_id: column_id("b"),
            to_index: 0,
        },
        &DefaultClock,
    );

    assert_eq!(ids_in(&held, "a"), ["t1"]);
    assert_eq!(ids_in(&store.snapshot(), "b"), ["t1"]);
}
