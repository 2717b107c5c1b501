//! Session lifecycle endpoints.

use axum::{extract::State, http::StatusCode, Json};
use tutor_core::{RecordAttemptRequest, Session, StartSessionRequest};

use crate::extractors::{JsonBody, ValidatedJson};
use crate::response::{ApiError, AttemptResponse, SessionStartedResponse, SessionsResponse};
use crate::state::AppState;

/// POST /sessions - Open a session, dropping any unfinished one.
pub async fn start_handler(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<StartSessionRequest>,
) -> Result<(StatusCode, Json<SessionStartedResponse>), ApiError> {
    let mut engine = state.engine.lock();
    engine.start_session(req.game_type)?;

    let session = engine
        .active_session()
        .cloned()
        .ok_or_else(|| ApiError::internal("Session was not opened"))?;

    Ok((StatusCode::CREATED, Json(SessionStartedResponse { session })))
}

/// POST /sessions/attempts - Record one answer in the open session.
pub async fn attempt_handler(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<RecordAttemptRequest>,
) -> Result<Json<AttemptResponse>, ApiError> {
    let mut engine = state.engine.lock();
    let recorded = engine.record_attempt(req.correct, req.mistake_type)?;

    Ok(Json(AttemptResponse {
        recorded,
        session: engine.active_session().cloned(),
    }))
}

/// POST /sessions/end - Finalize the open session, or null when idle.
pub async fn end_handler(
    State(state): State<AppState>,
) -> Result<Json<Option<Session>>, ApiError> {
    let session = state.engine.lock().end_session()?;
    Ok(Json(session))
}

/// GET /sessions - Finalized history plus the open session.
pub async fn list_handler(State(state): State<AppState>) -> Json<SessionsResponse> {
    let engine = state.engine.lock();
    Json(SessionsResponse {
        sessions: engine.sessions().to_vec(),
        current_session: engine.active_session().cloned(),
    })
}
