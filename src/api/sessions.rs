use axum::extract::State;
use axum::Json;
use tracing::{info, warn};

use super::extract::{IdPath, ValidatedJson};
use super::{AppState, MessageResponse, SessionCreatedResponse};
use crate::domain::{SessionFields, SessionPayload, WorkoutSession};
use crate::error::AppError;

fn session_not_found(session_id: i64) -> AppError {
    warn!(session_id, "Session not found");
    AppError::NotFound("Session not found!".into())
}

/// `GET /session/{session_id}`
pub async fn get_session(
    State(state): State<AppState>,
    IdPath(session_id): IdPath,
) -> Result<Json<WorkoutSession>, AppError> {
    state
        .repo
        .get_session(session_id)
        .await?
        .map(Json)
        .ok_or_else(|| session_not_found(session_id))
}

/// `POST /add_session`
pub async fn add_session(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<SessionPayload>,
) -> Result<Json<SessionCreatedResponse>, AppError> {
    let fields = SessionFields::try_from(payload)?;

    let session_id = state.repo.insert_session(&fields).await?;
    info!(session_id, member_id = fields.member_id, "Session added");

    Ok(Json(SessionCreatedResponse {
        message: format!("New session: {} was added to the database!", session_id),
        session_id,
    }))
}

/// `PUT /sessions/{session_id}`
///
/// Replaces every column. A `session_id` in the body moves the row to that key.
pub async fn update_session(
    State(state): State<AppState>,
    IdPath(session_id): IdPath,
    ValidatedJson(payload): ValidatedJson<SessionPayload>,
) -> Result<Json<MessageResponse>, AppError> {
    let fields = SessionFields::try_from(payload)?;

    if !state.repo.session_exists(session_id).await? {
        return Err(session_not_found(session_id));
    }
    if state.repo.update_session(session_id, &fields).await? == 0 {
        return Err(session_not_found(session_id));
    }

    let new_id = fields.session_id.unwrap_or(session_id);
    info!(session_id, new_session_id = new_id, "Session updated");

    Ok(Json(MessageResponse::new(format!(
        "Session id: {} has been updated!",
        new_id
    ))))
}

/// `DELETE /sessions/{session_id}`
pub async fn delete_session(
    State(state): State<AppState>,
    IdPath(session_id): IdPath,
) -> Result<Json<MessageResponse>, AppError> {
    if !state.repo.session_exists(session_id).await? || !state.repo.delete_session(session_id).await?
    {
        return Err(session_not_found(session_id));
    }
    info!(session_id, "Session deleted");

    Ok(Json(MessageResponse::new(format!(
        "Session id: {} has been deleted!",
        session_id
    ))))
}
