//! Tests for the HTTP routing table
//!
//! Exercises `route` directly with methods, URLs, and raw bodies.

use serde_json::json;
use taskflow::server::tiny_http::route;
use tiny_http::Method;

use crate::common::{self, NewTaskBuilder, service};

#[test]
fn test_list_empty() {
    let service = service();
    let reply = route(&service, &Method::Get, "/api/tasks", "");
    assert_eq!(reply.status, 200);
    assert_eq!(common::json(&reply), json!({ "success": true, "count": 0, "data": [] }));
}

#[test]
fn test_create_returns_201() {
    let service = service();
    let reply = route(
        &service,
        &Method::Post,
        "/api/tasks",
        r#"{"title": "Write tests", "priority": "high"}"#,
    );
    assert_eq!(reply.status, 201);

    let body = common::json(&reply);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Task created successfully");
    assert_eq!(body["data"]["id"], 1);
    assert_eq!(body["data"]["title"], "Write tests");
    assert_eq!(body["data"]["status"], "pending");
    assert_eq!(body["data"]["priority"], "high");
    assert!(body["data"]["createdAt"].is_string());
    assert!(body["data"]["updatedAt"].is_string());
}

#[test]
fn test_create_without_title_is_400() {
    let service = service();
    let reply = route(&service, &Method::Post, "/api/tasks", "");
    assert_eq!(reply.status, 400);
    assert_eq!(common::json(&reply), json!({ "success": false, "error": "Title is required" }));
}

#[test]
fn test_malformed_json_is_400() {
    let service = service();
    let reply = route(&service, &Method::Post, "/api/tasks", "{not json");
    assert_eq!(reply.status, 400);
    let body = common::json(&reply);
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().starts_with("Invalid JSON"));
}

#[test]
fn test_get_by_id() {
    let service = service();
    NewTaskBuilder::new("Find me").create(&service);

    let reply = route(&service, &Method::Get, "/api/tasks/1", "");
    assert_eq!(reply.status, 200);
    assert_eq!(common::json(&reply)["data"]["title"], "Find me");

    let reply = route(&service, &Method::Get, "/api/tasks/2", "");
    assert_eq!(reply.status, 404);
    assert_eq!(common::json(&reply)["error"], "Task with id 2 not found");
}

#[test]
fn test_non_numeric_id_is_400_on_every_id_route() {
    let service = service();
    let cases = [
        (Method::Get, "/api/tasks/abc", ""),
        (Method::Put, "/api/tasks/abc", r#"{"title": "x"}"#),
        (Method::Patch, "/api/tasks/abc/status", r#"{"status": "completed"}"#),
        (Method::Patch, "/api/tasks/abc/next", ""),
        (Method::Delete, "/api/tasks/abc", ""),
    ];

    for (method, url, body) in cases {
        let reply = route(&service, &method, url, body);
        assert_eq!(reply.status, 400, "{method} {url}");
        assert_eq!(common::json(&reply), json!({ "success": false, "error": "Invalid task ID" }));
    }
}

#[test]
fn test_stats_route_is_not_an_id() {
    let service = service();
    NewTaskBuilder::new("a").status("in-progress").create(&service);

    let reply = route(&service, &Method::Get, "/api/tasks/stats", "");
    assert_eq!(reply.status, 200);
    assert_eq!(
        common::json(&reply),
        json!({
            "success": true,
            "data": {
                "total": 1,
                "byStatus": { "pending": 0, "in-progress": 1, "completed": 0 },
                "byPriority": { "low": 0, "medium": 1, "high": 0 }
            }
        })
    );
}

#[test]
fn test_filters_from_query_string() {
    let service = service();
    NewTaskBuilder::new("a").priority("low").create(&service);
    NewTaskBuilder::new("b").priority("high").create(&service);

    let reply = route(&service, &Method::Get, "/api/tasks?priority=high", "");
    let body = common::json(&reply);
    assert_eq!(body["count"], 1);
    assert_eq!(body["data"][0]["title"], "b");

    let reply = route(&service, &Method::Get, "/api/tasks?status=bogus", "");
    assert_eq!(reply.status, 400);
}

#[test]
fn test_put_updates_fields() {
    let service = service();
    NewTaskBuilder::new("Old").create(&service);

    let reply = route(
        &service,
        &Method::Put,
        "/api/tasks/1",
        r#"{"title": "New", "status": "completed"}"#,
    );
    assert_eq!(reply.status, 200);
    let body = common::json(&reply);
    assert_eq!(body["message"], "Task updated successfully");
    assert_eq!(body["data"]["title"], "New");
    assert_eq!(body["data"]["status"], "completed");
}

#[test]
fn test_put_null_description_clears_it() {
    let service = service();
    NewTaskBuilder::new("a").description("old").create(&service);

    let reply = route(&service, &Method::Put, "/api/tasks/1", r#"{"description": null}"#);
    assert_eq!(reply.status, 200);
    let body = common::json(&reply);
    assert_eq!(body["data"]["description"], serde_json::Value::Null);
    assert_eq!(body["data"]["title"], "a");

    let reply = route(&service, &Method::Get, "/api/tasks/1", "");
    assert!(common::json(&reply)["data"]["description"].is_null());
}

#[test]
fn test_put_absent_description_keeps_it() {
    let service = service();
    NewTaskBuilder::new("a").description("old").create(&service);

    let reply = route(&service, &Method::Put, "/api/tasks/1", r#"{"title": "b"}"#);
    assert_eq!(common::json(&reply)["data"]["description"], "old");
}

#[test]
fn test_patch_status() {
    let service = service();
    NewTaskBuilder::new("a").create(&service);

    let reply = route(&service, &Method::Patch, "/api/tasks/1/status", "");
    assert_eq!(reply.status, 400);
    assert_eq!(common::json(&reply)["error"], "Status is required");

    let reply = route(&service, &Method::Patch, "/api/tasks/1/status", r#"{"status": "nope"}"#);
    assert_eq!(reply.status, 400);

    let reply =
        route(&service, &Method::Patch, "/api/tasks/1/status", r#"{"status": "completed"}"#);
    assert_eq!(reply.status, 200);
    assert_eq!(common::json(&reply)["message"], "Task status updated to completed");
}

#[test]
fn test_patch_next_until_terminal() {
    let service = service();
    route(&service, &Method::Post, "/api/tasks", r#"{"title": "Walk"}"#);

    let expected = ["in-progress", "completed", "completed", "completed"];
    for status in expected {
        let reply = route(&service, &Method::Patch, "/api/tasks/1/next", "");
        assert_eq!(reply.status, 200);
        let body = common::json(&reply);
        assert_eq!(body["data"]["status"], status);
        assert_eq!(body["message"], format!("Task moved to {status}"));
    }
}

#[test]
fn test_delete() {
    let service = service();
    NewTaskBuilder::new("a").create(&service);

    let reply = route(&service, &Method::Delete, "/api/tasks/1", "");
    assert_eq!(reply.status, 200);
    assert_eq!(
        common::json(&reply),
        json!({ "success": true, "message": "Task deleted successfully" })
    );

    let reply = route(&service, &Method::Delete, "/api/tasks/1", "");
    assert_eq!(reply.status, 404);
}

#[test]
fn test_health() {
    let service = service();
    let reply = route(&service, &Method::Get, "/api/health", "");
    assert_eq!(reply.status, 200);
    assert_eq!(common::json(&reply)["data"]["status"], "ok");
}

#[test]
fn test_unknown_routes_are_404() {
    let service = service();
    let cases = [
        (Method::Get, "/"),
        (Method::Get, "/tasks"),
        (Method::Get, "/apitasks"),
        (Method::Get, "/apis/tasks"),
        (Method::Get, "/api-v2/health"),
        (Method::Get, "/api/projects"),
        (Method::Post, "/api/tasks/1"),
        (Method::Patch, "/api/tasks/1/archive"),
        (Method::Delete, "/api/tasks"),
    ];

    for (method, url) in cases {
        let reply = route(&service, &method, url, "");
        assert_eq!(reply.status, 404, "{method} {url}");
        assert_eq!(common::json(&reply)["success"], false);
    }
}
