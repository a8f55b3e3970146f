//! Pure API handlers
//!
//! These handlers are HTTP-agnostic. They take the raw path segment and typed
//! bodies, call the task service, and return `Result<ApiResponse<T>, ApiError>`.
//! Input-shape problems (bad IDs, missing status) are rejected here, before the
//! service is called.

use crate::core::models::{Priority, Task, TaskFilter, TaskId, TaskStats};
use crate::core::ports::TaskRepository;
use crate::core::services::{TaskService, status_machine};

use super::error::ApiError;
use super::types::{
    ApiResponse, CreateTaskRequest, HealthData, ListTasksQuery, UpdateStatusRequest,
    UpdateTaskRequest,
};

/// Result of a handler call
pub type ApiResult<T> = Result<ApiResponse<T>, ApiError>;

// =============================================================================
// TASKS
// =============================================================================

/// List tasks, optionally filtered by status and priority
pub fn list_tasks<R: TaskRepository>(
    service: &TaskService<R>,
    query: &ListTasksQuery,
) -> ApiResult<Vec<Task>> {
    let status = query.status.as_deref().map(status_machine::parse).transpose()?;
    let priority = query
        .priority
        .as_deref()
        .map(str::parse::<Priority>)
        .transpose()
        .map_err(ApiError::bad_request)?;

    let tasks = service.get_all_tasks(TaskFilter { status, priority })?;
    Ok(ApiResponse::list(tasks))
}

/// Aggregate task statistics
pub fn get_statistics<R: TaskRepository>(service: &TaskService<R>) -> ApiResult<TaskStats> {
    Ok(ApiResponse::success(service.get_statistics()?))
}

/// Get a single task
pub fn get_task<R: TaskRepository>(service: &TaskService<R>, raw_id: &str) -> ApiResult<Task> {
    let id = parse_task_id(raw_id)?;
    Ok(ApiResponse::success(service.get_task_by_id(id)?))
}

/// Create a task
pub fn create_task<R: TaskRepository>(
    service: &TaskService<R>,
    req: CreateTaskRequest,
) -> ApiResult<Task> {
    let task = service.create_task(req.into())?;
    Ok(ApiResponse::success(task).with_message("Task created successfully"))
}

/// Apply a partial update to a task
pub fn update_task<R: TaskRepository>(
    service: &TaskService<R>,
    raw_id: &str,
    req: UpdateTaskRequest,
) -> ApiResult<Task> {
    let id = parse_task_id(raw_id)?;
    let task = service.update_task(id, req.into())?;
    Ok(ApiResponse::success(task).with_message("Task updated successfully"))
}

/// Set a task's status
pub fn update_task_status<R: TaskRepository>(
    service: &TaskService<R>,
    raw_id: &str,
    req: &UpdateStatusRequest,
) -> ApiResult<Task> {
    let id = parse_task_id(raw_id)?;
    let status = req
        .status
        .as_deref()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ApiError::bad_request("Status is required"))?;

    let task = service.update_task_status(id, status)?;
    let message = format!("Task status updated to {}", task.status);
    Ok(ApiResponse::success(task).with_message(message))
}

/// Advance a task to its next status
pub fn move_to_next_status<R: TaskRepository>(
    service: &TaskService<R>,
    raw_id: &str,
) -> ApiResult<Task> {
    let id = parse_task_id(raw_id)?;
    let task = service.move_to_next_status(id)?;
    let message = format!("Task moved to {}", task.status);
    Ok(ApiResponse::success(task).with_message(message))
}

/// Delete a task
pub fn delete_task<R: TaskRepository>(service: &TaskService<R>, raw_id: &str) -> ApiResult<()> {
    let id = parse_task_id(raw_id)?;
    service.delete_task(id)?;
    Ok(ApiResponse::message_only("Task deleted successfully"))
}

// =============================================================================
// HEALTH
// =============================================================================

/// Liveness probe
pub fn health<R: TaskRepository>(service: &TaskService<R>) -> ApiResult<HealthData> {
    Ok(ApiResponse::success(HealthData {
        status: "ok",
        version: crate::VERSION,
        tasks: service.count_tasks()?,
    }))
}

// =============================================================================
// HELPERS
// =============================================================================

/// Parse a task ID path segment
///
/// Only plain positive decimal integers are accepted.
pub fn parse_task_id(raw: &str) -> Result<TaskId, ApiError> {
    raw.parse::<TaskId>()
        .ok()
        .filter(|id| *id > 0 && raw.bytes().all(|b| b.is_ascii_digit()))
        .ok_or_else(|| ApiError::bad_request("Invalid task ID"))
}
