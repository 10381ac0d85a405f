//! Board service: the single writer between the view layer and the reducer.

use super::persistence::{encode_snapshot, load_or_default};
use super::store::{BoardStore, TransitionRecord};
use crate::board::domain::{
    Action, AppState, BoardDomainError, ColumnId, DragSession, Task, TaskChanges, TaskId,
    reconcile_drop,
};
use crate::board::ports::{SnapshotStore, StorageKey, TaskIdGenerator};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, warn};

/// Request payload for creating a task from user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    column_id: String,
    title: String,
    description: Option<String>,
}

impl CreateTaskRequest {
    /// Creates a request with the target column and title.
    #[must_use]
    pub fn new(column_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            column_id: column_id.into(),
            title: title.into(),
            description: None,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Request payload carrying the full contents of the task editor form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditTaskRequest {
    title: String,
    description: String,
}

impl EditTaskRequest {
    /// Creates a request from the edited title and description.
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    /// Returns only the fields that differ from `task`, with the title
    /// trimmed. An absent description compares equal to an empty one.
    #[must_use]
    pub fn changes_for(&self, task: &Task) -> TaskChanges {
        let mut changes = TaskChanges::new();
        let title = self.title.trim();
        if title != task.title() {
            changes = changes.with_title(title);
        }
        if self.description != task.description().unwrap_or_default() {
            changes = changes.with_description(self.description.clone());
        }
        changes
    }
}

/// Service-level errors for board operations.
#[derive(Debug, Error)]
pub enum BoardServiceError {
    /// Input validation failed.
    #[error(transparent)]
    Domain(#[from] BoardDomainError),
    /// The id generator produced an id that is already on the board.
    #[error("task id {0} is already in use")]
    DuplicateTaskId(TaskId),
}

/// Result type for board service operations.
pub type BoardServiceResult<T> = Result<T, BoardServiceError>;

/// Owns the current snapshot and serializes every transition through one
/// lock, persisting best-effort after each change.
///
/// Store writes happen after the transition lock is released, so a slow
/// store delays only the caller whose transition is being written. Writes
/// are ordered by transition sequence and a write older than the last
/// persisted one is skipped.
pub struct BoardService<S, C, G>
where
    S: SnapshotStore,
    C: Clock + Send + Sync,
    G: TaskIdGenerator,
{
    snapshots: Arc<S>,
    clock: Arc<C>,
    ids: Arc<G>,
    key: StorageKey,
    board: Mutex<BoardStore>,
    persisted: Mutex<u64>,
}

impl<S, C, G> BoardService<S, C, G>
where
    S: SnapshotStore,
    C: Clock + Send + Sync,
    G: TaskIdGenerator,
{
    /// Loads the snapshot stored under `key` (or the default board) and
    /// starts a service around it.
    pub async fn open(snapshots: Arc<S>, clock: Arc<C>, ids: Arc<G>, key: StorageKey) -> Self {
        let initial = load_or_default(snapshots.as_ref(), &key).await;
        Self::with_state(snapshots, clock, ids, key, initial)
    }

    /// Starts a service around an explicit initial snapshot.
    #[must_use]
    pub fn with_state(
        snapshots: Arc<S>,
        clock: Arc<C>,
        ids: Arc<G>,
        key: StorageKey,
        initial: AppState,
    ) -> Self {
        Self {
            snapshots,
            clock,
            ids,
            key,
            board: Mutex::new(BoardStore::new(initial)),
            persisted: Mutex::new(0),
        }
    }

    /// Returns the current snapshot.
    pub async fn snapshot(&self) -> Arc<AppState> {
        self.board.lock().await.snapshot()
    }

    /// Returns the transitions dispatched so far, oldest first.
    pub async fn history(&self) -> Vec<TransitionRecord> {
        self.board.lock().await.history().to_vec()
    }

    /// Applies `action` and returns the resulting snapshot.
    pub async fn dispatch(&self, action: Action) -> Arc<AppState> {
        self.dispatch_with(|_| Some(action)).await;
        self.snapshot().await
    }

    /// Creates a task at the end of the requested column.
    ///
    /// Returns the new task id, or `None` when the column does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Domain`] when the title is blank or the
    /// column id is blank, and [`BoardServiceError::DuplicateTaskId`] when
    /// the generated id is already taken.
    pub async fn create_task(
        &self,
        request: CreateTaskRequest,
    ) -> BoardServiceResult<Option<TaskId>> {
        let column_id = ColumnId::new(request.column_id)?;
        let title = request.title.trim();
        if title.is_empty() {
            return Err(BoardDomainError::EmptyTaskTitle.into());
        }

        let task_id = self.ids.next_id();
        let mut task = Task::created_now(task_id.clone(), title, self.clock.as_ref());
        if let Some(description) = request
            .description
            .as_deref()
            .map(str::trim)
            .filter(|description| !description.is_empty())
        {
            task = task.with_description(description);
        }

        let mut duplicate = false;
        let record = self
            .dispatch_with(|state| {
                if state.column(&column_id).is_none() {
                    debug!(%column_id, "create skipped: unknown column");
                    return None;
                }
                if state.task(&task_id).is_some() {
                    duplicate = true;
                    return None;
                }
                Some(Action::AddTask { column_id, task })
            })
            .await;
        if duplicate {
            warn!(%task_id, "generated task id collides with an existing task");
            return Err(BoardServiceError::DuplicateTaskId(task_id));
        }
        Ok(record.filter(|r| r.changed).map(|_| task_id))
    }

    /// Applies the editor's title and description to a task.
    ///
    /// Nothing is dispatched when neither field changed or the task is
    /// unknown. Returns whether the task was updated.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Domain`] when the edited title is blank.
    pub async fn edit_task(
        &self,
        task_id: &TaskId,
        request: EditTaskRequest,
    ) -> BoardServiceResult<bool> {
        if request.title.trim().is_empty() {
            return Err(BoardDomainError::EmptyTaskTitle.into());
        }
        let record = self
            .dispatch_with(|state| {
                let changes = request.changes_for(state.task(task_id)?);
                if changes.is_empty() {
                    debug!(%task_id, "edit skipped: nothing changed");
                    return None;
                }
                Some(Action::UpdateTask {
                    task_id: task_id.clone(),
                    changes,
                })
            })
            .await;
        Ok(changed(record.as_ref()))
    }

    /// Deletes a task from whichever active-board column lists it.
    ///
    /// Returns whether the task was removed.
    pub async fn delete_task(&self, task_id: &TaskId) -> bool {
        let record = self
            .dispatch_with(|state| {
                let column_id = state.column_of(task_id)?.clone();
                Some(Action::DeleteTask {
                    task_id: task_id.clone(),
                    column_id,
                })
            })
            .await;
        changed(record.as_ref())
    }

    /// Moves `dragged` to wherever it was dropped over.
    ///
    /// Returns whether the board changed.
    pub async fn drop_task(&self, dragged: &TaskId, over: &str) -> bool {
        let record = self
            .dispatch_with(|state| reconcile_drop(state, dragged, over))
            .await;
        changed(record.as_ref())
    }

    /// Ends a drag gesture, dispatching the reconciled move if there is one.
    ///
    /// The session is idle afterwards regardless of outcome. Returns whether
    /// the board changed.
    pub async fn complete_drag(&self, session: &mut DragSession, over: Option<&str>) -> bool {
        let record = self
            .dispatch_with(|state| session.finish(state, over))
            .await;
        changed(record.as_ref())
    }

    /// Derives an action from the latest snapshot and dispatches it under a
    /// single lock acquisition, so no other transition interleaves. The new
    /// snapshot is persisted once the lock is released.
    async fn dispatch_with<F>(&self, derive: F) -> Option<TransitionRecord>
    where
        F: FnOnce(&AppState) -> Option<Action>,
    {
        let (record, next) = {
            let mut board = self.board.lock().await;
            let current = board.snapshot();
            let action = derive(current.as_ref())?;
            let record = board.dispatch(action, self.clock.as_ref());
            let next = record.changed.then(|| board.snapshot());
            (record, next)
        };
        if let Some(snapshot) = next {
            self.persist(record.sequence, snapshot.as_ref()).await;
        }
        Some(record)
    }

    /// Writes the snapshot produced by transition `sequence` unless a later
    /// one is already stored. Failures are logged, never raised.
    async fn persist(&self, sequence: u64, snapshot: &AppState) {
        let mut persisted = self.persisted.lock().await;
        if *persisted >= sequence {
            debug!(sequence, latest = *persisted, "skipping superseded snapshot");
            return;
        }
        let encoded = match encode_snapshot(snapshot) {
            Ok(encoded) => encoded,
            Err(err) => {
                warn!(key = %self.key, error = %err, "failed to encode snapshot");
                return;
            }
        };
        match self.snapshots.write(&self.key, &encoded).await {
            Ok(()) => {
                *persisted = sequence;
                debug!(key = %self.key, sequence, bytes = encoded.len(), "persisted snapshot");
            }
            Err(err) => warn!(key = %self.key, error = %err, "failed to persist snapshot"),
        }
    }
}

fn changed(record: Option<&TransitionRecord>) -> bool {
    record.is_some_and(|record| record.changed)
}
