//! Task model
//!
//! A task is a unit of work with a title, an optional description, a priority,
//! and a lifecycle [`TaskStatus`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Priority, TaskStatus};

/// Numeric task identifier (positive, assigned by the repository)
pub type TaskId = u64;

/// A tracked unit of work
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique identifier
    pub id: TaskId,

    /// What needs to be done
    pub title: String,

    /// Optional longer explanation
    pub description: Option<String>,

    /// Current lifecycle status
    pub status: TaskStatus,

    /// Priority level
    pub priority: Priority,

    /// When this task was created
    pub created_at: DateTime<Utc>,

    /// When this task was last modified
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Materialise a validated draft under the given ID
    #[must_use]
    pub fn from_draft(id: TaskId, draft: TaskDraft) -> Self {
        let now = Utc::now();
        Self {
            id,
            title: draft.title,
            description: draft.description,
            status: draft.status,
            priority: draft.priority,
            created_at: now,
            updated_at: now,
        }
    }

    /// Record a modification
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// A validated task that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    /// Trimmed, non-empty title
    pub title: String,
    /// Optional description
    pub description: Option<String>,
    /// Initial status
    pub status: TaskStatus,
    /// Priority
    pub priority: Priority,
}

/// Raw fields for creating a task, before validation
///
/// Status and priority arrive as strings so unknown values can be reported
/// with the right error kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewTask {
    /// Required title
    pub title: Option<String>,
    /// Optional description
    pub description: Option<String>,
    /// Optional initial status (defaults to the first status)
    pub status: Option<String>,
    /// Optional priority (defaults to medium)
    pub priority: Option<String>,
}

/// Partial update of a task
///
/// Each field is applied only when present; `None` leaves the current value.
/// The description can also be cleared with `Some(None)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskUpdate {
    /// New title
    pub title: Option<String>,
    /// New description, or `Some(None)` to remove it
    pub description: Option<Option<String>>,
    /// New status
    pub status: Option<String>,
    /// New priority
    pub priority: Option<String>,
}

impl TaskUpdate {
    /// Whether the update carries no fields at all
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.status.is_none()
            && self.priority.is_none()
    }
}

/// Criteria for listing tasks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskFilter {
    /// Only tasks with this status
    pub status: Option<TaskStatus>,
    /// Only tasks with this priority
    pub priority: Option<Priority>,
}

impl TaskFilter {
    /// Whether a task satisfies every set criterion
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        self.status.is_none_or(|status| task.status == status)
            && self.priority.is_none_or(|priority| task.priority == priority)
    }
}
