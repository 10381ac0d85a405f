//! Shared world state for drag-and-drop BDD scenarios.

use std::sync::Arc;

use kanban::board::{
    adapters::{InMemorySnapshotStore, UuidTaskIds},
    domain::{AppState, Board, BoardId, Column, ColumnId, DragSession, Task, TaskId},
    ports::StorageKey,
    services::BoardService,
};
use mockable::DefaultClock;
use rstest::fixture;

/// Service type used by the BDD world.
pub type TestBoardService = BoardService<InMemorySnapshotStore, DefaultClock, UuidTaskIds>;

/// Scenario world for drag behaviour tests.
#[derive(Default)]
pub struct DragWorld {
    pub columns: Vec<(String, Vec<String>)>,
    pub service: Option<TestBoardService>,
    pub session: DragSession,
}

impl DragWorld {
    /// Returns the service, building it from the declared columns on first use.
    ///
    /// # Errors
    ///
    /// Returns an error when a declared column or task id is blank.
    pub fn service(&mut self) -> Result<&TestBoardService, eyre::Report> {
        if self.service.is_none() {
            let state = self.build_state()?;
            self.service = Some(BoardService::with_state(
                Arc::new(InMemorySnapshotStore::new()),
                Arc::new(DefaultClock),
                Arc::new(UuidTaskIds),
                StorageKey::default(),
                state,
            ));
        }
        self.service
            .as_ref()
            .ok_or_else(|| eyre::eyre!("board service missing from scenario world"))
    }

    fn build_state(&self) -> Result<AppState, eyre::Report> {
        let board_id = BoardId::new("scenario")?;
        let column_ids = self
            .columns
            .iter()
            .map(|(id, _)| ColumnId::new(id.as_str()))
            .collect::<Result<Vec<_>, _>>()?;
        let mut builder = AppState::builder()
            .with_board(Board::new(board_id.clone(), "Scenario", column_ids));
        for (id, tasks) in &self.columns {
            let task_ids = tasks
                .iter()
                .map(|task| TaskId::new(task.as_str()))
                .collect::<Result<Vec<_>, _>>()?;
            for task_id in &task_ids {
                builder = builder.with_task(Task::new(
                    task_id.clone(),
                    format!("Task {task_id}"),
                    chrono::Utc::now(),
                ));
            }
            builder =
                builder.with_column(Column::new(ColumnId::new(id.as_str())?, id).with_task_ids(task_ids));
        }
        Ok(builder.with_active_board(board_id).build())
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> DragWorld {
    DragWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
