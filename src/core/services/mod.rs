//! Business logic services
//!
//! - [`status_machine`] - Pure lifecycle rules for task statuses
//! - [`task_service`] - Task operations over a repository port

pub mod status_machine;
pub mod task_service;

pub use task_service::{MAX_TITLE_LEN, TaskService};
