//! Task repository port
//!
//! Defines the interface for storing and retrieving tasks.

use super::super::error::TaskResult;
use super::super::models::{Task, TaskDraft, TaskId};

/// Repository for managing tasks
///
/// Implementations own ID assignment: IDs are positive, increasing, and never
/// reused within one repository.
pub trait TaskRepository: Send + Sync {
    /// All tasks, ordered by ID
    fn list(&self) -> TaskResult<Vec<Task>>;

    /// Find a task by ID
    ///
    /// Returns `None` when the task does not exist.
    fn get(&self, id: TaskId) -> TaskResult<Option<Task>>;

    /// Store a new task and return it with its assigned ID
    fn insert(&self, draft: TaskDraft) -> TaskResult<Task>;

    /// Modify a task in place and return the stored result
    ///
    /// `apply` runs on a copy while the task is locked against other writers;
    /// the copy replaces the stored task only if `apply` succeeds. Fails with
    /// `TaskError::NotFound` when no task has this ID.
    fn update<F>(&self, id: TaskId, apply: F) -> TaskResult<Task>
    where
        F: FnOnce(&mut Task) -> TaskResult<()>;

    /// Remove a task
    ///
    /// Fails with `TaskError::NotFound` when no task has this ID.
    fn remove(&self, id: TaskId) -> TaskResult<()>;

    /// Count all tasks
    fn count(&self) -> TaskResult<usize> {
        Ok(self.list()?.len())
    }
}
