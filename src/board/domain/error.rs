//! Error types for board domain validation.

use thiserror::Error;

/// Errors returned while constructing domain board values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// The status type is empty after trimming.
    #[error("status type must not be empty")]
    EmptyStatusType,

    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTaskTitle,
}
