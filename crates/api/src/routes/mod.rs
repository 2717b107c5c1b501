//! API routes.

pub mod health;
pub mod progress;
pub mod report;
pub mod sessions;
pub mod tutor;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::state::AppState;

/// Creates the API router.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/sessions",
            get(sessions::list_handler).post(sessions::start_handler),
        )
        .route("/sessions/attempts", post(sessions::attempt_handler))
        .route("/sessions/end", post(sessions::end_handler))
        .route("/gaps", get(tutor::gaps_handler))
        .route("/gaps/analyze", post(tutor::analyze_handler))
        .route("/hints", post(tutor::hint_handler))
        .route("/celebrations", post(tutor::celebration_handler))
        .route("/suggestion", get(tutor::suggestion_handler))
        .route("/report", get(report::report_handler))
        .route("/report/summary", get(report::summary_handler))
        .route("/progress", get(progress::progress_handler))
        .route("/progress/current", post(progress::current_game_handler))
        .route(
            "/progress/levels",
            post(progress::update_level_handler).delete(progress::reset_handler),
        )
        .route("/health", get(health::health_handler))
        .route("/health/ready", get(health::ready_handler))
        .route("/health/live", get(health::live_handler))
        .route("/metrics", get(health::metrics_handler))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
