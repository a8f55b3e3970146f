//! Aggregate task counts

use serde::Serialize;

use super::{Priority, Task, TaskStatus};

/// Counts of tasks per status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    /// Pending tasks
    pub pending: usize,
    /// In-progress tasks
    #[serde(rename = "in-progress")]
    pub in_progress: usize,
    /// Completed tasks
    pub completed: usize,
}

/// Counts of tasks per priority
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PriorityCounts {
    /// Low priority tasks
    pub low: usize,
    /// Medium priority tasks
    pub medium: usize,
    /// High priority tasks
    pub high: usize,
}

/// Task statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskStats {
    /// Total number of tasks
    pub total: usize,
    /// Breakdown by status
    pub by_status: StatusCounts,
    /// Breakdown by priority
    pub by_priority: PriorityCounts,
}

impl TaskStats {
    /// Tally a set of tasks
    #[must_use]
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let mut stats = Self {
            total: tasks.len(),
            ..Self::default()
        };

        for task in tasks {
            match task.status {
                TaskStatus::Pending => stats.by_status.pending += 1,
                TaskStatus::InProgress => stats.by_status.in_progress += 1,
                TaskStatus::Completed => stats.by_status.completed += 1,
            }
            match task.priority {
                Priority::Low => stats.by_priority.low += 1,
                Priority::Medium => stats.by_priority.medium += 1,
                Priority::High => stats.by_priority.high += 1,
            }
        }

        stats
    }
}
