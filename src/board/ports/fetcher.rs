//! Fetch port supplying the task list of a board.

use crate::board::domain::{BoardId, Task};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for fetch operations.
pub type TaskFetchResult<T> = Result<T, TaskFetchError>;

/// Source of board tasks, typically a remote API.
#[async_trait]
pub trait TaskFetcher: Send + Sync {
    /// Fetches every task of the board.
    ///
    /// # Errors
    ///
    /// Returns [`TaskFetchError::BoardNotFound`] when the board does not exist
    /// or [`TaskFetchError::Transport`] when the underlying call fails.
    async fn fetch_tasks(&self, board_id: BoardId) -> TaskFetchResult<Vec<Task>>;
}

/// Errors returned by fetch implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskFetchError {
    /// The board is unknown to the collaborator.
    #[error("board not found: {0}")]
    BoardNotFound(BoardId),

    /// Network, storage or decoding failure.
    #[error("transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskFetchError {
    /// Wraps a transport error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
