//! Domain models for taskflow
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Task`] - A unit of work and its lifecycle state
//! - [`TaskStatus`] - Ordered lifecycle statuses
//! - [`Priority`] - How urgent a task is
//! - [`TaskStats`] - Aggregate counts over all tasks

mod priority;
mod stats;
mod status;
mod task;

pub use priority::Priority;
pub use stats::{PriorityCounts, StatusCounts, TaskStats};
pub use status::TaskStatus;
pub use task::{NewTask, Task, TaskDraft, TaskFilter, TaskId, TaskUpdate};
