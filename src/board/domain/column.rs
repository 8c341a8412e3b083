//! Board columns: ordered task groups keyed by status type.

use super::{StatusType, Task, TaskId};

/// One lane of the board.
///
/// A column references its tasks by identifier; the task values themselves
/// are owned by the task cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardColumn {
    status_type: StatusType,
    task_ids: Vec<TaskId>,
}

impl BoardColumn {
    /// Creates an empty column for the given status type.
    #[must_use]
    pub const fn new(status_type: StatusType) -> Self {
        Self {
            status_type,
            task_ids: Vec::new(),
        }
    }

    /// Returns the status type this column groups.
    #[must_use]
    pub const fn status_type(&self) -> &StatusType {
        &self.status_type
    }

    /// Returns task identifiers in display order.
    #[must_use]
    pub fn task_ids(&self) -> &[TaskId] {
        &self.task_ids
    }

    /// Returns `true` when the column holds the task.
    #[must_use]
    pub fn contains(&self, task_id: TaskId) -> bool {
        self.task_ids.contains(&task_id)
    }

    /// Returns the number of tasks in the column.
    #[must_use]
    pub fn len(&self) -> usize {
        self.task_ids.len()
    }

    /// Returns `true` when the column holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.task_ids.is_empty()
    }

    /// Appends a task to the end of the column.
    pub fn push(&mut self, task_id: TaskId) {
        self.task_ids.push(task_id);
    }

    /// Removes a task, keeping the relative order of the rest.
    ///
    /// Returns `false` when the task was not in the column.
    pub fn remove(&mut self, task_id: TaskId) -> bool {
        let before = self.task_ids.len();
        self.task_ids.retain(|id| *id != task_id);
        self.task_ids.len() != before
    }
}

/// Resolved view of a column handed to UI callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSnapshot {
    /// Status type of the column.
    pub status_type: StatusType,
    /// Tasks in display order.
    pub tasks: Vec<Task>,
}

impl ColumnSnapshot {
    /// Returns the task identifiers in display order.
    #[must_use]
    pub fn task_ids(&self) -> Vec<TaskId> {
        self.tasks.iter().map(Task::id).collect()
    }
}
