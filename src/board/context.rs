//! Process-wide slot for the board handle.
//!
//! View code anywhere in the tree reaches the board through a
//! [`BoardContext`] instead of threading the handle through every call.
//! Reading the slot before a handle was provided is a programming error and
//! is reported as [`BoardContextError::NotProvided`] on the spot.
//!
//! ```
//! use kanban::board::context::{BoardContext, BoardContextError};
//! use std::sync::Arc;
//!
//! static BOARD: BoardContext<String> = BoardContext::new();
//!
//! assert_eq!(BOARD.use_board(), Err(BoardContextError::NotProvided));
//! BOARD.provide(Arc::new("handle".to_owned()))?;
//! assert_eq!(BOARD.use_board()?.as_str(), "handle");
//! # Ok::<(), BoardContextError>(())
//! ```

use std::sync::{Arc, OnceLock};
use thiserror::Error;

/// Misuse of a [`BoardContext`].
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum BoardContextError {
    /// The handle was read before one was provided.
    #[error("board context used before a board handle was provided")]
    NotProvided,
    /// A second handle was provided.
    #[error("board context already holds a board handle")]
    AlreadyProvided,
}

/// Write-once holder of the shared board handle.
#[derive(Debug)]
pub struct BoardContext<T> {
    handle: OnceLock<Arc<T>>,
}

impl<T> BoardContext<T> {
    /// Creates an empty context.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            handle: OnceLock::new(),
        }
    }

    /// Installs the handle.
    ///
    /// # Errors
    ///
    /// Returns [`BoardContextError::AlreadyProvided`] when a handle is
    /// already installed; the existing handle is kept.
    pub fn provide(&self, handle: Arc<T>) -> Result<(), BoardContextError> {
        self.handle
            .set(handle)
            .map_err(|_| BoardContextError::AlreadyProvided)
    }

    /// Returns the installed handle.
    ///
    /// # Errors
    ///
    /// Returns [`BoardContextError::NotProvided`] when no handle has been
    /// installed yet.
    pub fn use_board(&self) -> Result<Arc<T>, BoardContextError> {
        self.handle
            .get()
            .map(Arc::clone)
            .ok_or(BoardContextError::NotProvided)
    }

    /// Returns `true` once a handle has been installed.
    #[must_use]
    pub fn is_provided(&self) -> bool {
        self.handle.get().is_some()
    }
}

impl<T> Default for BoardContext<T> {
    fn default() -> Self {
        Self::new()
    }
}
