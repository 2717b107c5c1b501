//! Level progress endpoints.

use axum::{extract::State, Json};
use tutor_core::{CurrentGameRequest, LevelProgress, LevelUpdateRequest};

use crate::extractors::{JsonBody, ValidatedJson};
use crate::response::{ApiError, LevelResponse};
use crate::state::AppState;

/// GET /progress
pub async fn progress_handler(State(state): State<AppState>) -> Json<LevelProgress> {
    Json(state.engine.lock().levels().clone())
}

/// POST /progress/current
pub async fn current_game_handler(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CurrentGameRequest>,
) -> Result<Json<LevelProgress>, ApiError> {
    let mut engine = state.engine.lock();
    engine.set_current_game(req.game_type)?;
    Ok(Json(engine.levels().clone()))
}

/// POST /progress/levels - Levels only go up; the stored level is returned.
pub async fn update_level_handler(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<LevelUpdateRequest>,
) -> Result<Json<LevelResponse>, ApiError> {
    let level = state.engine.lock().update_level(req.game_type, req.level)?;
    Ok(Json(LevelResponse {
        game_type: req.game_type,
        level,
    }))
}

/// DELETE /progress/levels
pub async fn reset_handler(
    State(state): State<AppState>,
) -> Result<Json<LevelProgress>, ApiError> {
    let mut engine = state.engine.lock();
    engine.reset_levels()?;
    Ok(Json(engine.levels().clone()))
}
