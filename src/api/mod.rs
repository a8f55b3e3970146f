//! HTTP-agnostic API layer
//!
//! This module provides typed request/response structures and handlers that
//! can be used by any HTTP server implementation (`tiny_http`, axum, etc.)
//! or directly by clients.
//!
//! ## Design
//!
//! - **Handlers are plain functions**: Take typed input, return `Result<ApiResponse<T>, ApiError>`
//! - **Types are framework-agnostic**: No HTTP types leak into this module
//! - **Errors carry HTTP semantics**: `ApiError` knows its status code for translation

mod error;
mod handlers;
mod types;

pub use error::{ApiError, ErrorCode};
pub use handlers::{
    ApiResult, create_task, delete_task, get_statistics, get_task, health, list_tasks,
    move_to_next_status, parse_task_id, update_task, update_task_status,
};
pub use types::{
    ApiResponse, CreateTaskRequest, HealthData, ListTasksQuery, UpdateStatusRequest,
    UpdateTaskRequest,
};
