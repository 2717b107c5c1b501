//! Tests for error handling on the tutor endpoints.
//!
//! These tests verify that the API returns correct error codes for bad input
//! and for a store that stops accepting writes.

use axum::http::StatusCode;
use integration_tests::{fixtures, setup::TestContext};
use serde_json::{json, Value};
use tutor_core::GameType;

/// Unknown game returns VALID_001
#[tokio::test]
async fn test_unknown_game_returns_400() {
    let ctx = TestContext::new();
    let server = ctx.server();

    let response = server
        .post("/sessions")
        .json(&json!({ "gameType": "chess" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["code"], "VALID_001", "Expected VALID_001 for unknown game");
    assert_eq!(ctx.store.save_count(), 0);
}

/// Body that is not JSON returns VALID_001
#[tokio::test]
async fn test_malformed_body_returns_400() {
    let ctx = TestContext::new();
    let server = ctx.server();

    let response = server
        .post("/sessions/attempts")
        .content_type("application/json")
        .text("{\"correct\": tru")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["code"], "VALID_001");
}

/// Over-long mistake tag returns VALID_002 with details
#[tokio::test]
async fn test_long_mistake_tag_returns_400() {
    let ctx = TestContext::new();
    let server = ctx.server();

    server
        .post("/sessions")
        .json(&fixtures::start_body(GameType::Counting))
        .await
        .assert_status(StatusCode::CREATED);

    let response = server
        .post("/sessions/attempts")
        .json(&fixtures::mistake_body(&"x".repeat(65)))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["code"], "VALID_002");
    assert!(body["details"].as_array().is_some_and(|d| !d.is_empty()));

    let listing: Value = server.get("/sessions").await.json();
    assert_eq!(listing["currentSession"]["attempts"], 0);
}

/// Levels outside 1..=100 and oversized rounds are rejected
#[tokio::test]
async fn test_out_of_range_values_return_400() {
    let ctx = TestContext::new();
    let server = ctx.server();

    let response = server
        .post("/progress/levels")
        .json(&json!({ "gameType": "memory", "level": 0 }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["code"], "VALID_002");

    let response = server
        .post("/celebrations")
        .json(&json!({ "gameType": "memory", "correct": 1, "total": 10_001 }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

/// Failed save returns STORE_002 but keeps the in-memory transition
#[tokio::test]
async fn test_store_failure_returns_500() {
    let ctx = TestContext::new();
    let server = ctx.server();
    ctx.set_store_failure(true);

    let response = server
        .post("/sessions")
        .json(&fixtures::start_body(GameType::Matching))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body["code"], "STORE_002", "Expected STORE_002 for failed save");

    let listing: Value = server.get("/sessions").await.json();
    assert_eq!(listing["currentSession"]["gameType"], "matching");

    ctx.set_store_failure(false);
    let response = server.post("/sessions/end").await;
    response.assert_status_ok();

    let saved = ctx.store.last_saved().expect("state was saved after recovery");
    assert_eq!(saved.sessions.len(), 1);
    assert_eq!(saved.sessions[0].game_type, GameType::Matching);
}

/// Reads never touch the store, so they keep working while it is down
#[tokio::test]
async fn test_reads_survive_store_failure() {
    let ctx = TestContext::with_state(fixtures::mixed_history(fixtures::START_MILLIS));
    let server = ctx.server();
    ctx.set_store_failure(true);

    server.get("/report").await.assert_status_ok();
    server.get("/suggestion").await.assert_status_ok();
    server
        .post("/hints")
        .json(&json!({ "gameType": "patterns" }))
        .await
        .assert_status_ok();

    let response = server.post("/gaps/analyze").await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
}
