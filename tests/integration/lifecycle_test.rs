//! Integration tests for the full task lifecycle over HTTP
//!
//! Create -> read -> advance to terminal -> update -> delete, all against a
//! live server.

use std::thread;

use crate::TestServer;

#[test]
fn test_task_lifecycle() {
    let server = TestServer::start();

    let (status, body) = server.request(
        "POST",
        "/api/tasks",
        Some(r#"{"title": "Release 1.0", "priority": "high"}"#),
    );
    assert_eq!(status, 201);
    assert_eq!(body["data"]["id"], 1);
    assert_eq!(body["data"]["status"], "pending");

    let (status, body) = server.request("GET", "/api/tasks/1", None);
    assert_eq!(status, 200);
    assert_eq!(body["data"]["title"], "Release 1.0");

    for expected in ["in-progress", "completed", "completed"] {
        let (status, body) = server.request("PATCH", "/api/tasks/1/next", None);
        assert_eq!(status, 200);
        assert_eq!(body["data"]["status"], expected);
    }

    let (status, body) = server.request(
        "PUT",
        "/api/tasks/1",
        Some(r#"{"description": "Shipped"}"#),
    );
    assert_eq!(status, 200);
    assert_eq!(body["data"]["description"], "Shipped");
    assert_eq!(body["data"]["status"], "completed");

    let (status, body) = server.request("GET", "/api/tasks/stats", None);
    assert_eq!(status, 200);
    assert_eq!(body["data"]["byStatus"]["completed"], 1);
    assert_eq!(body["data"]["byPriority"]["high"], 1);

    let (status, body) = server.request("DELETE", "/api/tasks/1", None);
    assert_eq!(status, 200);
    assert_eq!(body["message"], "Task deleted successfully");

    let (status, _) = server.request("GET", "/api/tasks/1", None);
    assert_eq!(status, 404);
}

#[test]
fn test_status_patch_and_filters() {
    let server = TestServer::start();
    server.request("POST", "/api/tasks", Some(r#"{"title": "a"}"#));
    server.request("POST", "/api/tasks", Some(r#"{"title": "b"}"#));

    let (status, body) = server.request(
        "PATCH",
        "/api/tasks/2/status",
        Some(r#"{"status": "in-progress"}"#),
    );
    assert_eq!(status, 200);
    assert_eq!(body["message"], "Task status updated to in-progress");

    let (status, body) = server.request("GET", "/api/tasks?status=in-progress", None);
    assert_eq!(status, 200);
    assert_eq!(body["count"], 1);
    assert_eq!(body["data"][0]["title"], "b");

    let (status, body) = server.request(
        "PATCH",
        "/api/tasks/2/status",
        Some(r#"{"status": "done"}"#),
    );
    assert_eq!(status, 400);
    assert_eq!(
        body["error"],
        "Invalid status: done. Use: pending, in-progress, completed"
    );
}

#[test]
fn test_validation_errors() {
    let server = TestServer::start();

    let (status, body) = server.request("POST", "/api/tasks", Some("{}"));
    assert_eq!(status, 400);
    assert_eq!(body["error"], "Title is required");

    let (status, _) = server.request("POST", "/api/tasks", Some("{\"title\":"));
    assert_eq!(status, 400);

    let (status, body) = server.request("GET", "/api/tasks/abc", None);
    assert_eq!(status, 400);
    assert_eq!(body["error"], "Invalid task ID");
}

#[test]
fn test_concurrent_creates_get_unique_ids() {
    let server = TestServer::start();

    thread::scope(|scope| {
        for i in 0..8 {
            let server = &server;
            scope.spawn(move || {
                let body = format!(r#"{{"title": "task {i}"}}"#);
                let (status, _) = server.request("POST", "/api/tasks", Some(&body));
                assert_eq!(status, 201);
            });
        }
    });

    let (_, body) = server.request("GET", "/api/tasks", None);
    assert_eq!(body["count"], 8);
    let mut ids: Vec<u64> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|task| task["id"].as_u64().unwrap())
        .collect();
    ids.sort_unstable();
    assert_eq!(ids, (1..=8).collect::<Vec<_>>());
}
