//! Service layer: state store, persistence codec and the board service.

pub mod board;
pub mod persistence;
pub mod store;

pub use board::{
    BoardService, BoardServiceError, BoardServiceResult, CreateTaskRequest, EditTaskRequest,
};
pub use persistence::{
    CURRENT_SNAPSHOT_VERSION, SnapshotDecodeError, decode_snapshot, encode_snapshot,
    load_or_default,
};
pub use store::{BoardStore, TransitionRecord};
