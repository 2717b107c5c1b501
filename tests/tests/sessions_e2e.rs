//! End-to-end tests for the tutor HTTP surface.
//!
//! Drives the real router and engine with a mock store and a manual clock,
//! plus one run over the JSON state file.

use axum::http::StatusCode;
use axum_test::TestServer;
use integration_tests::{
    fixtures::{self, DAY_MILLIS, START_MILLIS},
    setup::{file_backed_router, TestContext},
};
use serde_json::{json, Value};
use tutor_core::{CelebrationTier, GameType};

/// Four right, one miscount: stored with accuracy 0.8 and no gap.
#[tokio::test]
async fn test_counting_round_is_recorded() {
    let ctx = TestContext::new();
    let server = ctx.server();

    let response = server
        .post("/sessions")
        .json(&fixtures::start_body(GameType::Counting))
        .await;
    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["session"]["gameType"], "counting");
    assert_eq!(body["session"]["attempts"], 0);
    assert_eq!(body["session"]["timestamp"], START_MILLIS);

    for _ in 0..4 {
        server
            .post("/sessions/attempts")
            .json(&fixtures::attempt_body(true))
            .await
            .assert_status_ok();
    }
    let response = server
        .post("/sessions/attempts")
        .json(&fixtures::mistake_body("miscount"))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["recorded"], true);
    assert_eq!(body["session"]["attempts"], 5);

    ctx.advance_minutes(3);
    let response = server.post("/sessions/end").await;
    response.assert_status_ok();
    let session: Value = response.json();
    assert_eq!(session["attempts"], 5);
    assert_eq!(session["correctAnswers"], 4);
    assert_eq!(session["mistakePatterns"], json!(["miscount"]));
    assert_eq!(session["timeSpent"], 3 * fixtures::MINUTE_MILLIS);

    let listing: Value = server.get("/sessions").await.json();
    assert_eq!(listing["sessions"].as_array().map(Vec::len), Some(1));
    assert!(listing["currentSession"].is_null());

    let saved = ctx.store.last_saved().expect("state was saved");
    assert_eq!(saved.sessions.len(), 1);
    assert!(saved.current_session.is_none());
    assert!(saved.knowledge_gaps.is_empty());
}

/// Starting over drops the unfinished session without saving it to history.
#[tokio::test]
async fn test_restart_discards_unfinished_session() {
    let ctx = TestContext::new();
    let server = ctx.server();

    server
        .post("/sessions")
        .json(&fixtures::start_body(GameType::Shapes))
        .await
        .assert_status(StatusCode::CREATED);
    server
        .post("/sessions/attempts")
        .json(&fixtures::attempt_body(false))
        .await
        .assert_status_ok();
    server
        .post("/sessions")
        .json(&fixtures::start_body(GameType::Colors))
        .await
        .assert_status(StatusCode::CREATED);

    let listing: Value = server.get("/sessions").await.json();
    assert_eq!(listing["currentSession"]["gameType"], "colors");
    assert_eq!(listing["currentSession"]["attempts"], 0);

    let ended: Value = server.post("/sessions/end").await.json();
    assert_eq!(ended["gameType"], "colors");

    let listing: Value = server.get("/sessions").await.json();
    let games: Vec<&str> = listing["sessions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["gameType"].as_str().unwrap())
        .collect();
    assert_eq!(games, vec!["colors"]);
}

/// An empty mistake tag still counts the attempt, without a pattern.
#[tokio::test]
async fn test_empty_mistake_tag_counts_attempt() {
    let ctx = TestContext::new();
    let server = ctx.server();

    server
        .post("/sessions")
        .json(&fixtures::start_body(GameType::Counting))
        .await
        .assert_status(StatusCode::CREATED);

    let response = server
        .post("/sessions/attempts")
        .json(&fixtures::mistake_body(""))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["recorded"], true);
    assert_eq!(body["session"]["attempts"], 1);
    assert_eq!(body["session"]["correctAnswers"], 0);
    assert_eq!(body["session"]["mistakePatterns"], json!([]));
}

/// Attempts and ends with nothing open change nothing.
#[tokio::test]
async fn test_idle_calls_are_no_ops() {
    let ctx = TestContext::new();
    let server = ctx.server();

    let body: Value = server
        .post("/sessions/attempts")
        .json(&fixtures::attempt_body(true))
        .await
        .json();
    assert_eq!(body["recorded"], false);
    assert!(body["session"].is_null());

    let response = server.post("/sessions/end").await;
    response.assert_status_ok();
    let ended: Value = response.json();
    assert!(ended.is_null());

    assert_eq!(ctx.store.save_count(), 0);
}

/// Gaps are re-derived from loaded history and drive the suggestion.
#[tokio::test]
async fn test_gaps_and_suggestion_from_history() {
    let ctx = TestContext::with_state(fixtures::mixed_history(START_MILLIS));
    let server = ctx.server();

    let body: Value = server.get("/gaps").await.json();
    assert_eq!(
        body["knowledgeGaps"],
        json!([
            {
                "skill": "shapes",
                "difficulty": "high",
                "gameType": "shapes",
                "description": "Needs more practice with shapes"
            },
            {
                "skill": "counting",
                "difficulty": "medium",
                "gameType": "counting",
                "description": "Improving at counting"
            }
        ])
    );

    let suggestion: Value = server.get("/suggestion").await.json();
    assert_eq!(suggestion["gameType"], "shapes");
    assert_eq!(suggestion["displayName"], "Shape Sorting");
    assert_eq!(suggestion["reason"], "You could use some practice with this!");
}

/// With no history every game ties and the first one wins.
#[tokio::test]
async fn test_fresh_suggestion_is_first_game() {
    let ctx = TestContext::new();
    let suggestion: Value = ctx.server().get("/suggestion").await.json();
    assert_eq!(suggestion["gameType"], "shapes");
    assert_eq!(suggestion["reason"], "This looks fun to try!");
}

#[tokio::test]
async fn test_analyze_saves_gaps() {
    let ctx = TestContext::with_state(fixtures::mixed_history(START_MILLIS));
    let server = ctx.server();

    let response = server.post("/gaps/analyze").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["knowledgeGaps"].as_array().map(Vec::len), Some(2));

    let saved = ctx.store.last_saved().expect("gaps were saved");
    assert_eq!(saved.knowledge_gaps.len(), 2);
    assert_eq!(saved.sessions.len(), 4);
}

/// Struggling players get the most basic hint.
#[tokio::test]
async fn test_hint_follows_recent_accuracy() {
    let ctx = TestContext::with_state(fixtures::mixed_history(START_MILLIS));
    let server = ctx.server();

    let body: Value = server
        .post("/hints")
        .json(&json!({ "gameType": "shapes", "context": { "round": 2 } }))
        .await
        .json();
    assert_eq!(body["hint"], GameType::Shapes.hints()[0]);

    let body: Value = server
        .post("/hints")
        .json(&json!({ "gameType": "memory" }))
        .await
        .json();
    let hint = body["hint"].as_str().unwrap();
    assert!(GameType::Memory.hints().contains(&hint));
}

#[tokio::test]
async fn test_celebrations() {
    let ctx = TestContext::new();
    let server = ctx.server();

    let body: Value = server
        .post("/celebrations")
        .json(&json!({ "gameType": "colors", "correct": 5, "total": 5 }))
        .await
        .json();
    let message = body["message"].as_str().unwrap();
    assert!(CelebrationTier::Perfect.messages().contains(&message));

    let body: Value = server
        .post("/celebrations")
        .json(&json!({ "gameType": "colors", "correct": 0, "total": 0 }))
        .await
        .json();
    assert!(body["message"].is_null());
}

/// Only the last seven days count.
#[tokio::test]
async fn test_progress_report() {
    let mut state = fixtures::mixed_history(START_MILLIS);
    state.sessions.insert(
        0,
        fixtures::finished_session(GameType::Memory, 5, 5, START_MILLIS - 8 * DAY_MILLIS),
    );
    let ctx = TestContext::with_state(state);
    let server = ctx.server();

    let report: Value = server.get("/report").await.json();
    assert_eq!(report["totalSessions"], 4);
    assert_eq!(report["totalTimeSpent"], 8 * fixtures::MINUTE_MILLIS);
    let average = report["averageAccuracy"].as_f64().unwrap();
    assert!((average - 0.5625).abs() < 1e-9);
    assert!(report["gameBreakdown"].get("memory").is_none());
    assert_eq!(report["gameBreakdown"]["shapes"]["sessions"], 2);
    assert_eq!(report["improvements"], json!(["shapes"]));
    assert_eq!(report["strengths"], json!([]));

    let response = server.get("/report/summary").await;
    response.assert_status_ok();
    let text = response.text();
    assert!(text.contains("Games played: 4"));
    assert!(text.contains("Time spent: 8 min"));
    assert!(text.contains("Accuracy: 56%"));
    assert!(text.contains("Keep practicing: Shape Sorting"));
}

#[tokio::test]
async fn test_level_progress() {
    let ctx = TestContext::new();
    let server = ctx.server();

    let progress: Value = server.get("/progress").await.json();
    assert_eq!(progress["levels"]["counting"], 1);
    assert!(progress["currentGame"].is_null());

    server
        .post("/progress/current")
        .json(&json!({ "gameType": "counting" }))
        .await
        .assert_status_ok();

    let body: Value = server
        .post("/progress/levels")
        .json(&json!({ "gameType": "counting", "level": 3 }))
        .await
        .json();
    assert_eq!(body["level"], 3);

    let body: Value = server
        .post("/progress/levels")
        .json(&json!({ "gameType": "counting", "level": 2 }))
        .await
        .json();
    assert_eq!(body["level"], 3);

    let progress: Value = server.delete("/progress/levels").await.json();
    assert_eq!(progress["levels"]["counting"], 1);
    assert_eq!(progress["currentGame"], "counting");

    let saved = ctx.store.last_saved().expect("levels were saved");
    assert_eq!(saved.levels.level(GameType::Counting), 1);
}

/// A restart from the saved record serves the same progress.
#[tokio::test]
async fn test_reload_reproduces_state() {
    let ctx = TestContext::with_state(fixtures::mixed_history(START_MILLIS));
    let server = ctx.server();

    server
        .post("/sessions")
        .json(&fixtures::start_body(GameType::Shapes))
        .await
        .assert_status(StatusCode::CREATED);
    server
        .post("/sessions/attempts")
        .json(&fixtures::attempt_body(false))
        .await
        .assert_status_ok();
    server
        .post("/sessions/end")
        .await
        .assert_status_ok();
    server
        .post("/sessions")
        .json(&fixtures::start_body(GameType::Patterns))
        .await
        .assert_status(StatusCode::CREATED);
    server
        .post("/progress/levels")
        .json(&json!({ "gameType": "patterns", "level": 4 }))
        .await
        .assert_status_ok();

    let sessions_before: Value = server.get("/sessions").await.json();
    let gaps_before: Value = server.get("/gaps").await.json();
    let progress_before: Value = server.get("/progress").await.json();

    let saved = ctx.store.last_saved().expect("state was saved");
    let restarted = TestContext::with_state(saved);
    let server = restarted.server();

    let sessions_after: Value = server.get("/sessions").await.json();
    let gaps_after: Value = server.get("/gaps").await.json();
    let progress_after: Value = server.get("/progress").await.json();

    assert_eq!(sessions_after, sessions_before);
    assert_eq!(gaps_after, gaps_before);
    assert_eq!(progress_after, progress_before);
    assert_eq!(sessions_after["currentSession"]["gameType"], "patterns");
}

/// Progress written to the state file is served again after a restart.
#[tokio::test]
async fn test_file_store_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data/tutor-state.json");

    let server = TestServer::new(file_backed_router(&path)).unwrap();
    server
        .post("/sessions")
        .json(&fixtures::start_body(GameType::Memory))
        .await
        .assert_status(StatusCode::CREATED);
    server
        .post("/sessions/attempts")
        .json(&fixtures::mistake_body("forgot"))
        .await
        .assert_status_ok();
    server.post("/sessions/end").await.assert_status_ok();
    server
        .post("/progress/levels")
        .json(&json!({ "gameType": "memory", "level": 2 }))
        .await
        .assert_status_ok();

    let raw: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw["sessions"][0]["mistakePatterns"], json!(["forgot"]));
    assert!(raw.get("currentSession").is_none());

    let restarted = TestServer::new(file_backed_router(&path)).unwrap();
    let listing: Value = restarted.get("/sessions").await.json();
    assert_eq!(listing["sessions"][0]["gameType"], "memory");
    let progress: Value = restarted.get("/progress").await.json();
    assert_eq!(progress["levels"]["memory"], 2);
}
