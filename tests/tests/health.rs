//! Tests for health check and metrics endpoints.
//!
//! These tests verify the probes return correct status and structure.

use axum::http::StatusCode;
use integration_tests::{fixtures, setup::TestContext};
use serde_json::Value;
use tutor_core::GameType;

/// Test /health endpoint returns proper structure
#[tokio::test]
async fn test_health_endpoint_structure() {
    let ctx = TestContext::new();
    let server = ctx.server();

    let response = server.get("/health").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert!(
        body.get("status").is_some(),
        "Response should have 'status' field"
    );
    assert_eq!(body["components"][0]["name"], "storage");
}

/// Storage reports healthy once a save has gone through
#[tokio::test]
async fn test_ready_after_first_save() {
    let ctx = TestContext::new();
    let server = ctx.server();

    server
        .post("/sessions")
        .json(&fixtures::start_body(GameType::Shapes))
        .await
        .assert_status(StatusCode::CREATED);
    assert_eq!(ctx.store.save_count(), 1);

    server.get("/health/ready").await.assert_status_ok();

    let body: Value = server.get("/health").await.json();
    assert_eq!(body["status"], "healthy");
}

/// Test /health/live always succeeds
#[tokio::test]
async fn test_live_probe() {
    let ctx = TestContext::new();
    ctx.server()
        .get("/health/live")
        .await
        .assert_status(StatusCode::OK);
}

/// Counters move with the session lifecycle
#[tokio::test]
async fn test_metrics_snapshot() {
    let ctx = TestContext::new();
    let server = ctx.server();

    server
        .post("/sessions")
        .json(&fixtures::start_body(GameType::Patterns))
        .await
        .assert_status(StatusCode::CREATED);

    let response = server.get("/metrics").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert!(body["sessions_started"].as_u64().unwrap_or(0) >= 1);
    assert!(body["store_saves"].as_u64().unwrap_or(0) >= 1);
    assert!(body.get("session_duration_buckets").is_some());
}
