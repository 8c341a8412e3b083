//! In-memory implementation of the task fetch port.

use crate::board::{
    domain::{BoardId, Task},
    ports::{TaskFetchError, TaskFetchResult, TaskFetcher},
};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};
use std::time::Duration;

/// Thread-safe in-memory task source keyed by board.
///
/// Counts every fetch so callers can assert how often the collaborator was
/// hit, and can delay responses to simulate a slow network.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskFetcher {
    boards: Arc<RwLock<HashMap<BoardId, Vec<Task>>>>,
    fetch_count: Arc<AtomicUsize>,
    latency: Option<Duration>,
}

impl InMemoryTaskFetcher {
    /// Creates an empty fetcher with no boards.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Delays every fetch by `latency`.
    #[must_use]
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Registers or replaces the task list of a board.
    ///
    /// # Errors
    ///
    /// Returns [`TaskFetchError::Transport`] when the board map lock is
    /// poisoned.
    pub fn insert_board(&self, board_id: BoardId, tasks: Vec<Task>) -> TaskFetchResult<()> {
        let mut boards = self.boards.write().map_err(|err| {
            TaskFetchError::transport(std::io::Error::other(err.to_string()))
        })?;
        boards.insert(board_id, tasks);
        Ok(())
    }

    /// Registers a board from a JSON array of tasks, as a remote API would
    /// return it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskFetchError::Transport`] when the payload does not decode
    /// or the board map lock is poisoned.
    pub fn insert_board_json(&self, board_id: BoardId, payload: &str) -> TaskFetchResult<()> {
        let tasks: Vec<Task> = serde_json::from_str(payload).map_err(TaskFetchError::transport)?;
        self.insert_board(board_id, tasks)
    }

    /// Returns how many fetches have been issued so far.
    #[must_use]
    pub fn fetch_count(&self) -> usize {
        self.fetch_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TaskFetcher for InMemoryTaskFetcher {
    async fn fetch_tasks(&self, board_id: BoardId) -> TaskFetchResult<Vec<Task>> {
        self.fetch_count.fetch_add(1, Ordering::SeqCst);
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }

        let boards = self.boards.read().map_err(|err| {
            TaskFetchError::transport(std::io::Error::other(err.to_string()))
        })?;
        boards
            .get(&board_id)
            .cloned()
            .ok_or(TaskFetchError::BoardNotFound(board_id))
    }
}
