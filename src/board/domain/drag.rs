//! Drag-and-drop reconciliation.
//!
//! A completed gesture reports two raw ids: the dragged task and whatever it
//! was released over. The drop target may be another task (insert before it)
//! or a column's empty area (append). [`reconcile_drop`] turns that pair into
//! at most one [`Action::MoveTask`]; [`DragSession`] tracks the transient
//! "currently dragging" flag, which never enters the durable snapshot.

use super::{Action, AppState, ColumnId, TaskId};
use tracing::debug;

/// Derives the move transition for a drop of `dragged` onto `over`.
///
/// Only columns of the active board are searched. Returns `None` when the
/// dragged task is not listed there, when `over` names neither a task on the
/// board nor an existing column, or when the task was dropped onto itself.
#[must_use]
pub fn reconcile_drop(state: &AppState, dragged: &TaskId, over: &str) -> Option<Action> {
    let Some(from_column_id) = state.column_of(dragged) else {
        debug!(task_id = %dragged, "drop ignored: dragged task not on the active board");
        return None;
    };

    let (to_column_id, to_index) = resolve_target(state, over)?;

    if *from_column_id == to_column_id && *dragged == over {
        debug!(task_id = %dragged, "drop ignored: dropped onto itself");
        return None;
    }

    Some(Action::MoveTask {
        task_id: dragged.clone(),
        from_column_id: from_column_id.clone(),
        to_column_id,
        to_index,
    })
}

/// Resolves a raw drop-target id to a destination column and index.
fn resolve_target(state: &AppState, over: &str) -> Option<(ColumnId, usize)> {
    let Ok(over_id) = TaskId::new(over) else {
        debug!("drop ignored: blank drop target");
        return None;
    };

    if let Some(column_id) = state.column_of(&over_id) {
        let index = state
            .column(column_id)
            .and_then(|column| column.position_of(&over_id))?;
        return Some((column_id.clone(), index));
    }

    let column_id = ColumnId::from_trusted(over_id.into_inner());
    let on_active_board = state
        .active_board()
        .is_some_and(|board| board.column_order().contains(&column_id));
    match state.column(&column_id).filter(|_| on_active_board) {
        Some(column) => {
            let index = column.len();
            Some((column_id, index))
        }
        None => {
            debug!(
                target_id = over,
                "drop ignored: target is neither a task nor a column on the active board"
            );
            None
        }
    }
}

/// Phase of a single drag gesture.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DragState {
    /// No gesture in progress.
    #[default]
    Idle,
    /// A task is being dragged.
    Dragging(TaskId),
}

/// Transient drag state: `Idle -> Dragging(task) -> Idle`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DragSession {
    state: DragState,
}

impl DragSession {
    /// Creates an idle session.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: DragState::Idle,
        }
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn state(&self) -> &DragState {
        &self.state
    }

    /// Returns the task being dragged, if any.
    #[must_use]
    pub const fn dragging(&self) -> Option<&TaskId> {
        match &self.state {
            DragState::Dragging(task_id) => Some(task_id),
            DragState::Idle => None,
        }
    }

    /// Starts dragging `task_id`, replacing any gesture still in progress.
    pub fn start(&mut self, task_id: TaskId) {
        self.state = DragState::Dragging(task_id);
    }

    /// Abandons the gesture without producing a transition.
    pub fn cancel(&mut self) {
        self.state = DragState::Idle;
    }

    /// Ends the gesture and returns the transition to dispatch, if any.
    ///
    /// The session is back to [`DragState::Idle`] afterwards whatever the
    /// outcome. A release with no drop target yields `None`.
    pub fn finish(&mut self, state: &AppState, over: Option<&str>) -> Option<Action> {
        let previous = std::mem::take(&mut self.state);
        let DragState::Dragging(dragged) = previous else {
            debug!("drop ignored: no drag in progress");
            return None;
        };
        over.and_then(|target| reconcile_drop(state, &dragged, target))
    }
}
