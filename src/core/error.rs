//! Domain errors
//!
//! Every failure here is a local validation error or a missing task; none are
//! transient, so callers never retry them.

use thiserror::Error;

use super::models::TaskId;

/// Result alias for task operations
pub type TaskResult<T> = Result<T, TaskError>;

/// Errors raised by the status machine, the task service, and repositories
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskError {
    /// Malformed input: bad task ID, missing or invalid field
    #[error("{0}")]
    InvalidInput(String),

    /// A status name outside the lifecycle enumeration
    #[error("Invalid status: {0}. Use: pending, in-progress, completed")]
    InvalidStatus(String),

    /// No task with this ID
    #[error("Task with id {0} not found")]
    NotFound(TaskId),

    /// Repository failure
    #[error("Storage error: {0}")]
    Storage(String),
}

impl TaskError {
    /// Create an invalid-input error
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Create a storage error
    #[must_use]
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }
}
