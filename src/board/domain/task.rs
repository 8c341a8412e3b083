//! Task value and its status descriptor.

use super::{BoardDomainError, StatusType, TaskId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Status attached to a task.
///
/// Only `type` takes part in column grouping; the remaining fields are
/// presentation metadata carried along unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskStatus {
    #[serde(rename = "type")]
    status_type: StatusType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    label: Option<String>,
}

impl TaskStatus {
    /// Creates a status with no display label.
    #[must_use]
    pub const fn new(status_type: StatusType) -> Self {
        Self {
            status_type,
            label: None,
        }
    }

    /// Sets the human-readable label shown for this status.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Returns the grouping discriminator.
    #[must_use]
    pub const fn status_type(&self) -> &StatusType {
        &self.status_type
    }

    /// Returns the display label, if any.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

/// A task displayed on a board.
///
/// Decoding goes through [`Task::with_id`], so payloads with a blank title
/// are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TaskRecord")]
pub struct Task {
    id: TaskId,
    title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    status: TaskStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    due_date: Option<NaiveDate>,
}

/// Wire shape of a task before validation.
#[derive(Deserialize)]
struct TaskRecord {
    id: TaskId,
    title: String,
    #[serde(default)]
    description: Option<String>,
    status: TaskStatus,
    #[serde(default)]
    due_date: Option<NaiveDate>,
}

impl TryFrom<TaskRecord> for Task {
    type Error = BoardDomainError;

    fn try_from(record: TaskRecord) -> Result<Self, Self::Error> {
        let mut task = Self::with_id(record.id, record.title, record.status)?;
        task.description = record.description;
        task.due_date = record.due_date;
        Ok(task)
    }
}

impl Task {
    /// Creates a task with a fresh identifier.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyTaskTitle`] when the title is blank.
    pub fn new(title: impl Into<String>, status: TaskStatus) -> Result<Self, BoardDomainError> {
        Self::with_id(TaskId::new(), title, status)
    }

    /// Creates a task with a caller-supplied identifier.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyTaskTitle`] when the title is blank.
    pub fn with_id(
        id: TaskId,
        title: impl Into<String>,
        status: TaskStatus,
    ) -> Result<Self, BoardDomainError> {
        Ok(Self {
            id,
            title: validated_title(title.into())?,
            description: None,
            status,
            due_date: None,
        })
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Replaces the status.
    #[must_use]
    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    /// Replaces the title.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyTaskTitle`] when the title is blank.
    pub fn with_title(mut self, title: impl Into<String>) -> Result<Self, BoardDomainError> {
        self.title = validated_title(title.into())?;
        Ok(self)
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the current status.
    #[must_use]
    pub const fn status(&self) -> &TaskStatus {
        &self.status
    }

    /// Shorthand for the grouping key of the current status.
    #[must_use]
    pub const fn status_type(&self) -> &StatusType {
        self.status.status_type()
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }
}

fn validated_title(title: String) -> Result<String, BoardDomainError> {
    if title.trim().is_empty() {
        return Err(BoardDomainError::EmptyTaskTitle);
    }
    Ok(title)
}
