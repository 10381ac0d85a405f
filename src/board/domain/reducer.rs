//! The transition engine: `(snapshot, action) -> snapshot`.
//!
//! Every guard failure is a silent no-op. The input snapshot is handed back
//! untouched (the very same [`Arc`]) and the reason is emitted as a `debug`
//! event. A changing transition produces a fresh snapshot that shares every
//! untouched board, column and task with its predecessor.

use super::{Action, AppState, ColumnId, Task, TaskChanges, TaskId};
use mockable::Clock;
use std::sync::Arc;
use tracing::debug;

/// Applies `action` to `snapshot` and returns the next snapshot.
///
/// The function is total. Unknown columns or tasks, duplicate task ids and
/// unrecognized transition kinds all return `snapshot` itself, so
/// `Arc::ptr_eq(&snapshot, &next)` tells a caller that nothing changed.
///
/// # Move indices
///
/// For a move between two different columns, `to_index` is a position in the
/// destination list as it stands. For a move within one column, the task is
/// first removed and `to_index` is then shifted down by one when the task
/// originally sat before it, so dropping a task "onto" a later sibling places
/// it just before that sibling. In both cases the index is clamped to the
/// length of the list it is inserted into.
///
/// The clock is only read by [`Action::UpdateTask`], which stamps
/// `updated_at`.
pub fn apply(snapshot: &Arc<AppState>, action: &Action, clock: &impl Clock) -> Arc<AppState> {
    let next = match action {
        Action::AddTask { column_id, task } => add_task(snapshot, column_id, task),
        Action::MoveTask {
            task_id,
            from_column_id,
            to_column_id,
            to_index,
        } => move_task(snapshot, task_id, from_column_id, to_column_id, *to_index),
        Action::UpdateTask { task_id, changes } => update_task(snapshot, task_id, changes, clock),
        Action::DeleteTask { task_id, column_id } => delete_task(snapshot, task_id, column_id),
        Action::Unrecognized => {
            debug!("ignoring unrecognized transition");
            None
        }
    };
    next.map_or_else(|| Arc::clone(snapshot), Arc::new)
}

fn add_task(state: &AppState, column_id: &ColumnId, task: &Task) -> Option<AppState> {
    let Some(column) = state.columns.get(column_id) else {
        debug!(%column_id, "add ignored: unknown column");
        return None;
    };
    if state.tasks.contains_key(task.id()) {
        debug!(task_id = %task.id(), "add ignored: duplicate task id");
        return None;
    }

    let mut task_ids = column.task_ids().to_vec();
    task_ids.push(task.id().clone());

    let mut next = state.clone();
    next.tasks.insert(task.id().clone(), Arc::new(task.clone()));
    next.columns
        .insert(column_id.clone(), Arc::new(column.with_list(task_ids)));
    Some(next)
}

fn move_task(
    state: &AppState,
    task_id: &TaskId,
    from_column_id: &ColumnId,
    to_column_id: &ColumnId,
    to_index: usize,
) -> Option<AppState> {
    let (Some(from), Some(to)) = (
        state.columns.get(from_column_id),
        state.columns.get(to_column_id),
    ) else {
        debug!(%from_column_id, %to_column_id, "move ignored: unknown column");
        return None;
    };
    let Some(original_index) = from.position_of(task_id) else {
        debug!(%task_id, %from_column_id, "move ignored: task not in source column");
        return None;
    };

    let mut source = from.task_ids().to_vec();
    source.remove(original_index);

    let mut next = state.clone();
    if from_column_id == to_column_id {
        let shifted = if original_index < to_index {
            to_index - 1
        } else {
            to_index
        };
        let index = shifted.min(source.len());
        if index == original_index {
            debug!(%task_id, index, "move ignored: task already in place");
            return None;
        }
        source.insert(index, task_id.clone());
        next.columns
            .insert(from_column_id.clone(), Arc::new(from.with_list(source)));
        return Some(next);
    }

    let mut target = to.task_ids().to_vec();
    let index = to_index.min(target.len());
    target.insert(index, task_id.clone());
    next.columns
        .insert(from_column_id.clone(), Arc::new(from.with_list(source)));
    next.columns
        .insert(to_column_id.clone(), Arc::new(to.with_list(target)));
    Some(next)
}

fn update_task(
    state: &AppState,
    task_id: &TaskId,
    changes: &TaskChanges,
    clock: &impl Clock,
) -> Option<AppState> {
    let Some(task) = state.tasks.get(task_id) else {
        debug!(%task_id, "update ignored: unknown task");
        return None;
    };

    let mut next = state.clone();
    next.tasks
        .insert(task_id.clone(), Arc::new(task.merged(changes, clock)));
    Some(next)
}

fn delete_task(state: &AppState, task_id: &TaskId, column_id: &ColumnId) -> Option<AppState> {
    let Some(column) = state.columns.get(column_id) else {
        debug!(%column_id, "delete ignored: unknown column");
        return None;
    };
    if !state.tasks.contains_key(task_id) {
        debug!(%task_id, "delete ignored: unknown task");
        return None;
    }
    // Removing a task listed elsewhere would leave a dangling reference.
    if !column.contains(task_id) {
        debug!(%task_id, %column_id, "delete ignored: task not in column");
        return None;
    }

    let task_ids = column
        .task_ids()
        .iter()
        .filter(|id| *id != task_id)
        .cloned()
        .collect();

    let mut next = state.clone();
    next.tasks.remove(task_id);
    next.columns
        .insert(column_id.clone(), Arc::new(column.with_list(task_ids)));
    Some(next)
}
