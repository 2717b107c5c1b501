//! Personalization endpoints: gaps, hints, celebrations, next game.

use axum::{extract::State, Json};
use tutor_core::{CelebrationRequest, HintRequest, Suggestion};

use crate::extractors::{JsonBody, ValidatedJson};
use crate::response::{ApiError, CelebrationResponse, GapsResponse, HintResponse};
use crate::state::AppState;

/// GET /gaps - Gaps as of the last analysis.
pub async fn gaps_handler(State(state): State<AppState>) -> Json<GapsResponse> {
    Json(GapsResponse {
        knowledge_gaps: state.engine.lock().knowledge_gaps().to_vec(),
    })
}

/// POST /gaps/analyze - Recompute gaps from history and save them.
pub async fn analyze_handler(
    State(state): State<AppState>,
) -> Result<Json<GapsResponse>, ApiError> {
    let mut engine = state.engine.lock();
    let knowledge_gaps = engine.analyze_knowledge_gaps()?.to_vec();
    Ok(Json(GapsResponse { knowledge_gaps }))
}

/// POST /hints
pub async fn hint_handler(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<HintRequest>,
) -> Json<HintResponse> {
    let hint = state
        .engine
        .lock()
        .personalized_hint(req.game_type, &req.context);

    Json(HintResponse {
        game_type: req.game_type,
        hint: hint.to_string(),
    })
}

/// POST /celebrations
pub async fn celebration_handler(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CelebrationRequest>,
) -> Json<CelebrationResponse> {
    let message = state
        .engine
        .lock()
        .celebration_message(req.game_type, req.performance());

    Json(CelebrationResponse {
        game_type: req.game_type,
        message: message.map(str::to_string),
    })
}

/// GET /suggestion
pub async fn suggestion_handler(State(state): State<AppState>) -> Json<Suggestion> {
    Json(state.engine.lock().suggestion())
}
