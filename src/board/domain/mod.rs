//! Domain model for the Kanban board.
//!
//! Entities ([`Task`], [`Column`], [`Board`]) are plain data keyed by opaque
//! ids and aggregated into an immutable [`AppState`] snapshot. The only code
//! that produces new snapshots is the reducer ([`apply`]); drag gestures are
//! translated into reducer input by [`reconcile_drop`].

mod action;
mod board;
mod column;
mod drag;
mod error;
mod ids;
mod reducer;
mod state;
mod task;

pub use action::Action;
pub use board::Board;
pub use column::Column;
pub use drag::{DragSession, DragState, reconcile_drop};
pub use error::{BoardDomainError, InvariantViolation};
pub use ids::{BoardId, ColumnId, TaskId};
pub use reducer::apply;
pub use state::{
    AppState, AppStateBuilder, DEFAULT_BOARD_ID, DEFAULT_BOARD_NAME, DEFAULT_COLUMNS, UiState,
};
pub use task::{Task, TaskChanges};
