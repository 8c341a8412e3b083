//! Grouping of tasks into status columns.

use crate::board::domain::{BoardColumn, StatusType, Task, TaskId};
use std::collections::HashMap;

/// Ordered set of columns with one column per status type.
///
/// Column order is the order in which each status type was first seen.
/// Columns are never dropped by moves; an emptied column stays in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnIndex {
    columns: Vec<BoardColumn>,
    positions: HashMap<StatusType, usize>,
}

impl ColumnIndex {
    /// Creates an index with no columns.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the index from a task list.
    ///
    /// Columns are created in a first pass so that their order follows the
    /// first occurrence of each status type; tasks are appended in a second
    /// pass in input order.
    #[must_use]
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let mut index = Self::new();
        for task in tasks {
            index.ensure_column(task.status_type());
        }
        for task in tasks {
            index.append(task);
        }
        index
    }

    /// Returns the columns in display order.
    #[must_use]
    pub fn columns(&self) -> &[BoardColumn] {
        &self.columns
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns `true` when there are no columns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Looks up the column of a status type.
    #[must_use]
    pub fn column(&self, status_type: &StatusType) -> Option<&BoardColumn> {
        self.positions
            .get(status_type)
            .and_then(|position| self.columns.get(*position))
    }

    /// Returns the status type of the column holding `task_id`.
    #[must_use]
    pub fn column_of(&self, task_id: TaskId) -> Option<&StatusType> {
        self.columns
            .iter()
            .find(|column| column.contains(task_id))
            .map(BoardColumn::status_type)
    }

    /// Creates the column for `status_type` if it does not exist yet.
    ///
    /// Returns `true` when a column was created.
    pub fn ensure_column(&mut self, status_type: &StatusType) -> bool {
        let before = self.columns.len();
        self.position_for(status_type);
        self.columns.len() != before
    }

    /// Appends a task to the column of its status type, creating the column
    /// on a miss.
    ///
    /// Returns `true` when a column was created.
    pub fn append(&mut self, task: &Task) -> bool {
        let before = self.columns.len();
        let position = self.position_for(task.status_type());
        if let Some(column) = self.columns.get_mut(position) {
            column.push(task.id());
        }
        self.columns.len() != before
    }

    /// Removes a task from the column of `status_type`.
    ///
    /// Returns `false` when the column or the task is missing.
    pub fn remove(&mut self, task_id: TaskId, status_type: &StatusType) -> bool {
        let Some(position) = self.positions.get(status_type).copied() else {
            return false;
        };
        self.columns
            .get_mut(position)
            .is_some_and(|column| column.remove(task_id))
    }

    /// Drops every column.
    pub fn clear(&mut self) {
        self.columns.clear();
        self.positions.clear();
    }

    fn position_for(&mut self, status_type: &StatusType) -> usize {
        if let Some(position) = self.positions.get(status_type) {
            return *position;
        }
        let position = self.columns.len();
        self.columns.push(BoardColumn::new(status_type.clone()));
        self.positions.insert(status_type.clone(), position);
        position
    }
}
