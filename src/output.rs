//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use serde::Serialize;

use crate::core::models::TaskStatus;
use crate::core::services::status_machine;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// One step of the lifecycle
#[derive(Debug, Clone, Copy, Serialize)]
pub struct StatusStep {
    /// Status name
    pub status: TaskStatus,
    /// Status reached by advancing from this one
    pub next: TaskStatus,
    /// Whether this is the terminal status
    pub terminal: bool,
}

/// The task lifecycle, in order
#[derive(Debug, Serialize)]
pub struct LifecycleResult {
    /// Every status, first to terminal
    pub statuses: Vec<StatusStep>,
}

impl LifecycleResult {
    /// Describe the built-in lifecycle
    #[must_use]
    pub fn current() -> Self {
        let statuses = TaskStatus::ALL
            .into_iter()
            .map(|status| StatusStep {
                status,
                next: status_machine::next(status),
                terminal: status.is_terminal(),
            })
            .collect();
        Self { statuses }
    }

    /// Render the lifecycle as text or JSON
    #[must_use]
    pub fn render(&self, mode: OutputMode) -> String {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => serde_json::to_string_pretty(self).unwrap_or_default(),
        }
    }

    fn render_human(&self) -> String {
        let mut out = String::from("Task lifecycle:\n");
        for (index, step) in self.statuses.iter().enumerate() {
            let suffix = if step.terminal { " (terminal)" } else { "" };
            out.push_str(&format!("  {}. {}{suffix}\n", index + 1, step.status));
        }
        out
    }
}
