//! Error types for board domain validation.

use super::{BoardId, ColumnId, TaskId};
use thiserror::Error;

/// Errors returned while constructing board domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// An identifier was empty or whitespace only.
    #[error("{kind} identifier must not be blank")]
    BlankId {
        /// Which identifier kind was rejected.
        kind: &'static str,
    },

    /// A task title was empty after trimming.
    #[error("task title must not be empty")]
    EmptyTaskTitle,
}

/// A structural invariant that a snapshot failed to uphold.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvariantViolation {
    /// A column lists a task id that is missing from the task map.
    #[error("column {column_id} references unknown task {task_id}")]
    DanglingTaskReference {
        /// Column holding the stale reference.
        column_id: ColumnId,
        /// Task id that failed to resolve.
        task_id: TaskId,
    },

    /// A task id is listed by more than one column, or twice by one column.
    #[error("task {task_id} is listed more than once")]
    TaskListedMoreThanOnce {
        /// Offending task id.
        task_id: TaskId,
    },

    /// A task exists in the task map but no column lists it.
    #[error("task {task_id} is not owned by any column")]
    OrphanTask {
        /// Offending task id.
        task_id: TaskId,
    },

    /// A board lists the same column twice in its column order.
    #[error("board {board_id} lists column {column_id} more than once")]
    DuplicateColumnInOrder {
        /// Board with the duplicate entry.
        board_id: BoardId,
        /// Column listed twice.
        column_id: ColumnId,
    },

    /// A map entry is stored under a key different from its own id.
    #[error("entry stored under key {key} carries id {id}")]
    MismatchedKey {
        /// Map key.
        key: String,
        /// Identifier carried by the entry.
        id: String,
    },
}
