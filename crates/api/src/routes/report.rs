//! Caregiver report endpoints.

use axum::{extract::State, Json};
use tutor_core::ProgressReport;

use crate::state::AppState;

/// GET /report - Last seven days of play.
pub async fn report_handler(State(state): State<AppState>) -> Json<ProgressReport> {
    Json(state.engine.lock().progress_report())
}

/// GET /report/summary - Same report as plain text, with focus areas.
pub async fn summary_handler(State(state): State<AppState>) -> String {
    let mut text = state.engine.lock().progress_summary().join("\n");
    text.push('\n');
    text
}
