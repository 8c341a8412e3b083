//! Change notifications published by the board controller.

use crate::board::domain::{BoardId, StatusType, TaskId};
use chrono::{DateTime, Utc};

/// Outcome of [`super::BoardController::update_task`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskUpdate {
    /// No task with the given identifier is known; nothing changed.
    Ignored,
    /// The task kept its status type and was updated in its column.
    InPlace {
        /// Column the task stays in.
        status_type: StatusType,
    },
    /// The task moved to the column of its new status type.
    Moved {
        /// Column the task left.
        from: StatusType,
        /// Column the task joined.
        to: StatusType,
    },
}

/// Event broadcast to subscribers after each state change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardEvent {
    /// A different board was selected.
    BoardChanged {
        /// Newly selected board.
        board_id: BoardId,
        /// Whether cached tasks and columns were dropped.
        reset: bool,
    },
    /// Tasks were fetched and the columns rebuilt.
    TasksLoaded {
        /// Board the tasks belong to.
        board_id: BoardId,
        /// Number of tasks loaded.
        tasks: usize,
        /// Number of columns built.
        columns: usize,
        /// When the load completed.
        loaded_at: DateTime<Utc>,
    },
    /// A task was added.
    TaskAdded {
        /// Added task.
        task_id: TaskId,
        /// Column it was appended to.
        status_type: StatusType,
    },
    /// A known task was updated.
    TaskUpdated {
        /// Updated task.
        task_id: TaskId,
        /// How column membership changed.
        change: TaskUpdate,
    },
    /// Cached tasks and columns were dropped.
    Reset,
}
