//! Cache holding the most recently fetched task list.

use crate::board::domain::{Task, TaskId};
use std::future::Future;

/// Task list of the active board.
///
/// The cache starts unpopulated; only a successful [`TaskCache::set`] or
/// [`TaskCache::replace`] marks it populated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskCache {
    tasks: Vec<Task>,
    populated: bool,
}

impl TaskCache {
    /// Creates an unpopulated cache.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tasks: Vec::new(),
            populated: false,
        }
    }

    /// Returns `true` when the cache holds no tasks, populated or not.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Returns `true` once a task list has been stored.
    #[must_use]
    pub const fn is_populated(&self) -> bool {
        self.populated
    }

    /// Returns the held tasks in fetch order.
    #[must_use]
    pub fn data(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the number of held tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Awaits `fetch` and stores its result.
    ///
    /// Returns the number of tasks stored.
    ///
    /// # Errors
    ///
    /// Propagates the producer's error; the cache is left untouched.
    pub async fn set<F, Fut, E>(&mut self, fetch: F) -> Result<usize, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<Task>, E>>,
    {
        let tasks = fetch().await?;
        let count = tasks.len();
        self.replace(tasks);
        Ok(count)
    }

    /// Stores `tasks`, discarding the previous list.
    pub fn replace(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
        self.populated = true;
    }

    /// Drops all tasks and returns to the unpopulated state.
    pub fn clear(&mut self) {
        self.tasks.clear();
        self.populated = false;
    }

    /// Appends a task without changing the populated flag.
    pub fn push(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Returns `true` when a task with `id` is held.
    #[must_use]
    pub fn contains(&self, id: TaskId) -> bool {
        self.tasks.iter().any(|task| task.id() == id)
    }

    /// Finds a task by identifier.
    #[must_use]
    pub fn find(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Finds a task by identifier for in-place mutation.
    pub fn find_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.id() == id)
    }
}
