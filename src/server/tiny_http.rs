//! `tiny_http` server adapter
//!
//! Handles routing, body parsing, and response conversion for `tiny_http`.
//! Routing itself works on plain strings so it can be exercised without a
//! socket.

use std::io::{Cursor, Read as _};

use log::{error, info};
use serde::{Serialize, de::DeserializeOwned};
use tiny_http::{Header, Method, Request, Response, StatusCode};

use crate::api::{
    self, ApiError, ApiResponse, CreateTaskRequest, ListTasksQuery, UpdateStatusRequest,
    UpdateTaskRequest,
};
use crate::core::ports::TaskRepository;
use crate::core::services::TaskService;

/// A rendered JSON reply, before conversion into a framework response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    /// HTTP status code
    pub status: u16,
    /// JSON body
    pub body: String,
}

// =============================================================================
// REQUEST HANDLING
// =============================================================================

/// Handle an incoming request and return a response
pub fn handle_api_request<R: TaskRepository>(
    service: &TaskService<R>,
    request: &mut Request,
) -> Response<Cursor<Vec<u8>>> {
    let url = request.url().to_string();
    let method = request.method().clone();

    let reply = match read_body(request) {
        Ok(body) => route(service, &method, &url, &body),
        Err(e) => render_error(&e),
    };

    if reply.status >= 500 {
        error!("{method} {url} -> {}: {}", reply.status, reply.body);
    } else {
        info!("{method} {url} -> {}", reply.status);
    }

    into_response(reply)
}

/// Map a method, URL, and raw body to a handler
///
/// This is the main routing table. Every route lives under `/api`.
#[must_use]
pub fn route<R: TaskRepository>(
    service: &TaskService<R>,
    method: &Method,
    url: &str,
    body: &str,
) -> HttpReply {
    let (path, query) = url.split_once('?').unwrap_or((url, ""));

    let Some(api_path) = path
        .strip_prefix("/api")
        .filter(|rest| rest.is_empty() || rest.starts_with('/'))
    else {
        return not_found_reply(method, path);
    };
    let segments: Vec<&str> = api_path.trim_matches('/').split('/').collect();

    match (method, segments.as_slice()) {
        (Method::Get, ["health"]) => render(api::health(service), 200),

        // GET /tasks?status=&priority=
        (Method::Get, ["tasks"]) => {
            render(api::list_tasks(service, &ListTasksQuery::from_query(query)), 200)
        },

        // GET /tasks/stats must win over GET /tasks/{id}
        (Method::Get, ["tasks", "stats"]) => render(api::get_statistics(service), 200),

        (Method::Get, ["tasks", id]) => render(api::get_task(service, id), 200),

        (Method::Post, ["tasks"]) => match parse_json::<CreateTaskRequest>(body) {
            Ok(req) => render(api::create_task(service, req), 201),
            Err(e) => render_error(&e),
        },

        (Method::Put, ["tasks", id]) => match parse_json::<UpdateTaskRequest>(body) {
            Ok(req) => render(api::update_task(service, id, req), 200),
            Err(e) => render_error(&e),
        },

        (Method::Patch, ["tasks", id, "status"]) => {
            match parse_json::<UpdateStatusRequest>(body) {
                Ok(req) => render(api::update_task_status(service, id, &req), 200),
                Err(e) => render_error(&e),
            }
        },

        (Method::Patch, ["tasks", id, "next"]) => {
            render(api::move_to_next_status(service, id), 200)
        },

        (Method::Delete, ["tasks", id]) => render(api::delete_task(service, id), 200),

        _ => not_found_reply(method, path),
    }
}

// =============================================================================
// BODY PARSING
// =============================================================================

fn read_body(request: &mut Request) -> Result<String, ApiError> {
    let mut body = String::new();
    request
        .as_reader()
        .read_to_string(&mut body)
        .map_err(|e| ApiError::bad_request(format!("Failed to read request body: {e}")))?;
    Ok(body)
}

/// Parse a JSON body; an empty body counts as `{}`
fn parse_json<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    let body = if body.trim().is_empty() { "{}" } else { body };
    serde_json::from_str(body).map_err(|e| ApiError::bad_request(format!("Invalid JSON: {e}")))
}

// =============================================================================
// RESPONSE CONVERSION
// =============================================================================

/// Render a handler result with the given success status
fn render<T: Serialize>(result: api::ApiResult<T>, success_status: u16) -> HttpReply {
    match result {
        Ok(response) => json_reply(&response, success_status),
        Err(e) => render_error(&e),
    }
}

/// Render an error with its mapped status code
fn render_error(error: &ApiError) -> HttpReply {
    json_reply(&ApiResponse::<()>::error(&error.message), error.status_code())
}

fn not_found_reply(method: &Method, path: &str) -> HttpReply {
    render_error(&ApiError::not_found(format!("Route not found: {method} {path}")))
}

/// Serialize data to a JSON reply with status code
fn json_reply<T: Serialize>(data: &T, status: u16) -> HttpReply {
    match serde_json::to_string(data) {
        Ok(body) => HttpReply { status, body },
        Err(e) => HttpReply {
            status: 500,
            body: serde_json::json!({ "success": false, "error": e.to_string() }).to_string(),
        },
    }
}

fn into_response(reply: HttpReply) -> Response<Cursor<Vec<u8>>> {
    let response =
        Response::from_data(reply.body.into_bytes()).with_status_code(StatusCode(reply.status));
    match Header::from_bytes("Content-Type", "application/json") {
        Ok(header) => response.with_header(header),
        Err(()) => response,
    }
}
