//! The aggregate application snapshot.
//!
//! Entities reference each other only by id. Every entry is held behind an
//! [`Arc`], so producing the next snapshot copies the three maps shallowly and
//! replaces only the entries a transition touched. Earlier snapshots stay
//! valid and unchanged.

use super::{Board, BoardId, Column, ColumnId, InvariantViolation, Task, TaskId};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// Identifier of the board seeded into the default snapshot.
pub const DEFAULT_BOARD_ID: &str = "board-1";

/// Name of the board seeded into the default snapshot.
pub const DEFAULT_BOARD_NAME: &str = "The Board App";

/// Columns seeded into the default snapshot as `(id, title)` pairs.
pub const DEFAULT_COLUMNS: [(&str, &str); 3] = [("todo", "Todo"), ("doing", "Doing"), ("done", "Done")];

/// Transient, non-entity view selections carried in the snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiState {
    /// Board currently shown, if any.
    #[serde(default)]
    pub active_board_id: Option<BoardId>,
}

/// One complete, immutable value of the application state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    pub(crate) boards: HashMap<BoardId, Arc<Board>>,
    pub(crate) columns: HashMap<ColumnId, Arc<Column>>,
    pub(crate) tasks: HashMap<TaskId, Arc<Task>>,
    #[serde(default)]
    pub(crate) ui: UiState,
}

impl AppState {
    /// Returns the default snapshot: one board with empty "Todo", "Doing"
    /// and "Done" columns, active.
    #[must_use]
    pub fn initial() -> Self {
        let board_id = BoardId::from_trusted(DEFAULT_BOARD_ID);
        let columns: Vec<Column> = DEFAULT_COLUMNS
            .iter()
            .map(|(id, title)| Column::new(ColumnId::from_trusted(*id), *title))
            .collect();
        let board = Board::new(
            board_id.clone(),
            DEFAULT_BOARD_NAME,
            columns.iter().map(|column| column.id().clone()),
        );
        Self::builder()
            .with_board(board)
            .with_columns(columns)
            .with_active_board(board_id)
            .build()
    }

    /// Starts building a snapshot from parts.
    #[must_use]
    pub fn builder() -> AppStateBuilder {
        AppStateBuilder::default()
    }

    /// Returns the board map.
    #[must_use]
    pub const fn boards(&self) -> &HashMap<BoardId, Arc<Board>> {
        &self.boards
    }

    /// Returns the column map.
    #[must_use]
    pub const fn columns(&self) -> &HashMap<ColumnId, Arc<Column>> {
        &self.columns
    }

    /// Returns the task map.
    #[must_use]
    pub const fn tasks(&self) -> &HashMap<TaskId, Arc<Task>> {
        &self.tasks
    }

    /// Returns the view selections.
    #[must_use]
    pub const fn ui(&self) -> &UiState {
        &self.ui
    }

    /// Looks up a board.
    #[must_use]
    pub fn board(&self, id: &BoardId) -> Option<&Board> {
        self.boards.get(id).map(Arc::as_ref)
    }

    /// Looks up a column.
    #[must_use]
    pub fn column(&self, id: &ColumnId) -> Option<&Column> {
        self.columns.get(id).map(Arc::as_ref)
    }

    /// Looks up a task.
    #[must_use]
    pub fn task(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.get(id).map(Arc::as_ref)
    }

    /// Returns the active board, if one is selected and exists.
    #[must_use]
    pub fn active_board(&self) -> Option<&Board> {
        self.ui
            .active_board_id
            .as_ref()
            .and_then(|id| self.board(id))
    }

    /// Returns a board's columns in display order, skipping ids that do not
    /// resolve.
    #[must_use]
    pub fn board_columns(&self, board_id: &BoardId) -> Vec<&Column> {
        self.board(board_id)
            .map(|board| {
                board
                    .column_order()
                    .iter()
                    .filter_map(|id| self.column(id))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Returns a column's tasks in display order.
    ///
    /// Ids that fail to resolve are skipped, so readers tolerate a stale
    /// reference instead of failing on it.
    #[must_use]
    pub fn column_tasks(&self, column_id: &ColumnId) -> Vec<&Task> {
        self.column(column_id)
            .map(|column| {
                column
                    .task_ids()
                    .iter()
                    .filter_map(|id| self.task(id))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Returns the id of the column on the active board that lists
    /// `task_id`.
    #[must_use]
    pub fn column_of(&self, task_id: &TaskId) -> Option<&ColumnId> {
        self.active_board()?
            .column_order()
            .iter()
            .find(|id| self.column(id).is_some_and(|column| column.contains(task_id)))
    }

    /// Verifies the structural invariants of the snapshot.
    ///
    /// Every listed task id resolves, every task is listed by exactly one
    /// column, no board lists a column twice, and every map entry is keyed
    /// by its own id.
    ///
    /// # Errors
    ///
    /// Returns the first [`InvariantViolation`] found.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        self.check_keys()?;

        for board in self.boards.values() {
            let mut seen = HashSet::new();
            if let Some(duplicate) = board.column_order().iter().find(|id| !seen.insert(*id)) {
                return Err(InvariantViolation::DuplicateColumnInOrder {
                    board_id: board.id().clone(),
                    column_id: duplicate.clone(),
                });
            }
        }

        let mut listed = HashSet::new();
        for column in self.columns.values() {
            for task_id in column.task_ids() {
                if !self.tasks.contains_key(task_id) {
                    return Err(InvariantViolation::DanglingTaskReference {
                        column_id: column.id().clone(),
                        task_id: task_id.clone(),
                    });
                }
                if !listed.insert(task_id) {
                    return Err(InvariantViolation::TaskListedMoreThanOnce {
                        task_id: task_id.clone(),
                    });
                }
            }
        }

        match self.tasks.keys().find(|id| !listed.contains(id)) {
            Some(orphan) => Err(InvariantViolation::OrphanTask {
                task_id: orphan.clone(),
            }),
            None => Ok(()),
        }
    }

    fn check_keys(&self) -> Result<(), InvariantViolation> {
        let mismatch = |key: &str, id: &str| InvariantViolation::MismatchedKey {
            key: key.to_owned(),
            id: id.to_owned(),
        };
        if let Some((key, board)) = self.boards.iter().find(|(key, board)| *key != board.id()) {
            return Err(mismatch(key.as_str(), board.id().as_str()));
        }
        if let Some((key, column)) = self.columns.iter().find(|(key, column)| *key != column.id()) {
            return Err(mismatch(key.as_str(), column.id().as_str()));
        }
        if let Some((key, task)) = self.tasks.iter().find(|(key, task)| *key != task.id()) {
            return Err(mismatch(key.as_str(), task.id().as_str()));
        }
        Ok(())
    }
}

/// Assembles an [`AppState`] from entities, keying each by its own id.
#[derive(Debug, Default)]
pub struct AppStateBuilder {
    state: AppState,
}

impl AppStateBuilder {
    /// Adds a board.
    #[must_use]
    pub fn with_board(mut self, board: Board) -> Self {
        self.state.boards.insert(board.id().clone(), Arc::new(board));
        self
    }

    /// Adds a column.
    #[must_use]
    pub fn with_column(mut self, column: Column) -> Self {
        self.state
            .columns
            .insert(column.id().clone(), Arc::new(column));
        self
    }

    /// Adds several columns.
    #[must_use]
    pub fn with_columns(self, columns: impl IntoIterator<Item = Column>) -> Self {
        columns.into_iter().fold(self, Self::with_column)
    }

    /// Adds a task. Membership is expressed by the owning column's list.
    #[must_use]
    pub fn with_task(mut self, task: Task) -> Self {
        self.state.tasks.insert(task.id().clone(), Arc::new(task));
        self
    }

    /// Selects the active board.
    #[must_use]
    pub fn with_active_board(mut self, board_id: BoardId) -> Self {
        self.state.ui.active_board_id = Some(board_id);
        self
    }

    /// Finishes the snapshot. No invariant checking is performed.
    #[must_use]
    pub fn build(self) -> AppState {
        self.state
    }
}
