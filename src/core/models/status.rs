//! Task lifecycle status
//!
//! Statuses form a strict linear order: `pending` → `in-progress` → `completed`.
//! The order is defined once, by [`TaskStatus::ALL`].

use serde::{Deserialize, Serialize};

/// Where a task is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum TaskStatus {
    /// Created, work not started
    #[default]
    #[serde(rename = "pending")]
    Pending,
    /// Being worked on
    #[serde(rename = "in-progress")]
    InProgress,
    /// Finished (terminal)
    #[serde(rename = "completed")]
    Completed,
}

impl TaskStatus {
    /// Every status, in lifecycle order
    pub const ALL: [Self; 3] = [Self::Pending, Self::InProgress, Self::Completed];

    /// The status a new task starts in
    #[must_use]
    pub const fn first() -> Self {
        Self::ALL[0]
    }

    /// The last status; advancing past it is a no-op
    #[must_use]
    pub const fn terminal() -> Self {
        Self::ALL[Self::ALL.len() - 1]
    }

    /// Whether this is the terminal status
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed)
    }

    /// Zero-based position in the lifecycle order
    #[must_use]
    pub const fn position(self) -> usize {
        match self {
            Self::Pending => 0,
            Self::InProgress => 1,
            Self::Completed => 2,
        }
    }

    /// Canonical wire name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
        }
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("Invalid status: {s}. Use: pending, in-progress, completed"))
    }
}
