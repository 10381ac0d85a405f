//! Transitions that may be applied to a snapshot.

use super::{ColumnId, Task, TaskChanges, TaskId};
use serde::{Deserialize, Serialize};

/// A discrete, named request to change the snapshot.
///
/// Serialized with an internal `type` tag, e.g.
/// `{"type":"MOVE_TASK","taskId":"t1","fromColumnId":"todo","toColumnId":"done","toIndex":0}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    tag = "type",
    rename_all = "SCREAMING_SNAKE_CASE",
    rename_all_fields = "camelCase"
)]
pub enum Action {
    /// Inserts `task` and appends its id to `column_id`.
    AddTask {
        /// Column receiving the task.
        column_id: ColumnId,
        /// The new task, carrying a caller-supplied unique id.
        task: Task,
    },
    /// Relocates a task within or across columns.
    MoveTask {
        /// Task being moved.
        task_id: TaskId,
        /// Column currently listing the task.
        from_column_id: ColumnId,
        /// Destination column.
        to_column_id: ColumnId,
        /// Insertion index; see [`crate::board::domain::apply`] for how it is
        /// interpreted.
        to_index: usize,
    },
    /// Merges title and/or description edits into a task.
    UpdateTask {
        /// Task being edited.
        task_id: TaskId,
        /// Fields to replace.
        changes: TaskChanges,
    },
    /// Removes a task from its column and from the task map.
    DeleteTask {
        /// Task being removed.
        task_id: TaskId,
        /// Column listing the task.
        column_id: ColumnId,
    },
    /// A transition kind this build does not know. Always a no-op.
    #[serde(other)]
    Unrecognized,
}

impl Action {
    /// Returns the wire name of the transition kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::AddTask { .. } => "ADD_TASK",
            Self::MoveTask { .. } => "MOVE_TASK",
            Self::UpdateTask { .. } => "UPDATE_TASK",
            Self::DeleteTask { .. } => "DELETE_TASK",
            Self::Unrecognized => "UNRECOGNIZED",
        }
    }
}
