//! Unit tests for the board module.

mod id_generator_tests;
mod store_tests;

use crate::board::domain::{AppState, Board, BoardId, Column, ColumnId, Task, TaskId};
use mockable::DefaultClock;
use std::sync::Arc;

pub(super) fn task_id(id: &str) -> TaskId {
    TaskId::new(id).expect("valid task id")
}

pub(super) fn column_id(id: &str) -> ColumnId {
    ColumnId::new(id).expect("valid column id")
}

pub(super) fn task(id: &str) -> Task {
    Task::created_now(task_id(id), format!("Task {id}"), &DefaultClock)
}

/// Builds an active board `b` whose columns, in order, list the given tasks.
pub(super) fn board_with(columns: &[(&str, &[&str])]) -> Arc<AppState> {
    let board_id = BoardId::new("b").expect("valid board id");
    let board = Board::new(
        board_id.clone(),
        "Test board",
        columns.iter().map(|(id, _)| column_id(id)),
    );
    let builder = columns
        .iter()
        .fold(AppState::builder().with_board(board), |builder, (id, tasks)| {
            let column = Column::new(column_id(id), id.to_uppercase())
                .with_task_ids(tasks.iter().map(|t| task_id(t)));
            tasks
                .iter()
                .fold(builder.with_column(column), |b, t| b.with_task(task(t)))
        });
    Arc::new(builder.with_active_board(board_id).build())
}

/// Returns a column's task ids as plain strings.
pub(super) fn ids_in(state: &AppState, column: &str) -> Vec<String> {
    state
        .column(&column_id(column))
        .map(|c| c.task_ids().iter().map(ToString::to_string).collect())
        .unwrap_or_default()
}
