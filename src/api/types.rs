//! API request and response types
//!
//! All types are framework-agnostic and can be used by any client.

use serde::{Deserialize, Deserializer, Serialize};

use crate::core::models::{NewTask, TaskUpdate};

// =============================================================================
// RESPONSE ENVELOPE
// =============================================================================

/// Standard API response envelope
///
/// Successful responses carry `data` and, depending on the endpoint, a
/// `count` or a `message`. Failed responses carry only `error`.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    /// Whether the request succeeded
    pub success: bool,
    /// Number of items in `data` (list endpoints)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    /// Human-readable outcome (mutating endpoints)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Response data (present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Error message (present on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a successful response
    #[must_use]
    pub const fn success(data: T) -> Self {
        Self {
            success: true,
            count: None,
            message: None,
            data: Some(data),
            error: None,
        }
    }

    /// Attach a message
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl<T: Serialize> ApiResponse<Vec<T>> {
    /// Create a successful list response with its item count
    #[must_use]
    pub fn list(items: Vec<T>) -> Self {
        let count = items.len();
        Self {
            count: Some(count),
            ..Self::success(items)
        }
    }
}

impl ApiResponse<()> {
    /// Create a successful response that carries only a message
    #[must_use]
    pub fn message_only(message: impl Into<String>) -> Self {
        Self {
            success: true,
            count: None,
            message: Some(message.into()),
            data: None,
            error: None,
        }
    }

    /// Create an error response
    #[must_use]
    pub fn error(message: &str) -> Self {
        Self {
            success: false,
            count: None,
            message: None,
            data: None,
            error: Some(message.to_string()),
        }
    }
}

// =============================================================================
// REQUEST TYPES
// =============================================================================

/// Request body for creating a task
///
/// Every field is optional at the wire level; the service decides what is
/// required.
#[derive(Debug, Default, Deserialize)]
pub struct CreateTaskRequest {
    /// Task title (required by the service)
    #[serde(default)]
    pub title: Option<String>,
    /// Optional description
    #[serde(default)]
    pub description: Option<String>,
    /// Optional initial status
    #[serde(default)]
    pub status: Option<String>,
    /// Optional priority (low, medium, high)
    #[serde(default)]
    pub priority: Option<String>,
}

impl From<CreateTaskRequest> for NewTask {
    fn from(req: CreateTaskRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            status: req.status,
            priority: req.priority,
        }
    }
}

/// Request body for a partial task update
///
/// Absent fields are left unchanged. An explicit `null` description clears
/// it; `null` for any other field counts as absent.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateTaskRequest {
    /// New title
    #[serde(default)]
    pub title: Option<String>,
    /// New description (`Some(None)` clears it)
    #[serde(default, deserialize_with = "present_or_null")]
    pub description: Option<Option<String>>,
    /// New status
    #[serde(default)]
    pub status: Option<String>,
    /// New priority
    #[serde(default)]
    pub priority: Option<String>,
}

impl From<UpdateTaskRequest> for TaskUpdate {
    fn from(req: UpdateTaskRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            status: req.status,
            priority: req.priority,
        }
    }
}

/// Deserialize a member that was present in the body, keeping `null` apart
/// from absence (absence is handled by `#[serde(default)]`)
fn present_or_null<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Request body for setting a task's status
#[derive(Debug, Default, Deserialize)]
pub struct UpdateStatusRequest {
    /// Target status name
    #[serde(default)]
    pub status: Option<String>,
}

/// Query parameters for listing tasks
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListTasksQuery {
    /// Status filter
    pub status: Option<String>,
    /// Priority filter
    pub priority: Option<String>,
}

impl ListTasksQuery {
    /// Parse from a raw (percent-encoded) query string
    ///
    /// Empty values are treated as absent; unknown keys are ignored.
    #[must_use]
    pub fn from_query(query: &str) -> Self {
        let mut parsed = Self::default();
        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            if value.is_empty() {
                continue;
            }
            match key.as_ref() {
                "status" => parsed.status = Some(value.into_owned()),
                "priority" => parsed.priority = Some(value.into_owned()),
                _ => {},
            }
        }
        parsed
    }
}

// =============================================================================
// RESPONSE DATA TYPES
// =============================================================================

/// Health endpoint response data
#[derive(Debug, Clone, Copy, Serialize)]
pub struct HealthData {
    /// Always "ok" when the server answers
    pub status: &'static str,
    /// Crate version
    pub version: &'static str,
    /// Number of stored tasks
    pub tasks: usize,
}
