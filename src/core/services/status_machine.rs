//! Task status machine
//!
//! Validates status names and advances tasks along the lifecycle order.
//! Advancing a task that is already terminal leaves it where it is.
//!
//! All functions are pure and safe to call from any thread.

use crate::core::error::{TaskError, TaskResult};
use crate::core::models::{Task, TaskStatus};

/// Whether `status` is one of the canonical status names
#[must_use]
pub fn is_valid(status: &str) -> bool {
    parse(status).is_ok()
}

/// Parse a status name, failing with [`TaskError::InvalidStatus`]
pub fn parse(status: &str) -> TaskResult<TaskStatus> {
    status
        .parse()
        .map_err(|_| TaskError::InvalidStatus(status.to_string()))
}

/// The status following `current`; the terminal status maps to itself
#[must_use]
pub fn next(current: TaskStatus) -> TaskStatus {
    TaskStatus::ALL
        .get(current.position() + 1)
        .copied()
        .unwrap_or(current)
}

/// Return a copy of `task` with its status replaced
///
/// The input is never modified; an unknown status fails with
/// [`TaskError::InvalidStatus`].
pub fn set_status(task: &Task, status: &str) -> TaskResult<Task> {
    let status = parse(status)?;
    Ok(Task {
        status,
        ..task.clone()
    })
}
