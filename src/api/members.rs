use axum::extract::State;
use axum::Json;
use tracing::{info, warn};

use super::extract::{IdPath, ValidatedJson};
use super::{AppState, MemberCreatedResponse, MessageResponse};
use crate::domain::{Member, MemberUpdate, MissingField, NewMember};
use crate::error::AppError;

/// `POST /add_member`
pub async fn add_member(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<NewMember>,
) -> Result<Json<MemberCreatedResponse>, AppError> {
    let name = payload.name.ok_or(MissingField("name"))?;
    let age = payload.age.ok_or(MissingField("age"))?;

    let id = state.repo.insert_member(payload.id, &name, age).await?;
    info!(member_id = id, "Member added");

    Ok(Json(MemberCreatedResponse {
        message: format!("New member: {} was added to the database!", name),
        id,
    }))
}

/// `GET /members`
pub async fn list_members(State(state): State<AppState>) -> Result<Json<Vec<Member>>, AppError> {
    let members = state.repo.list_members().await?;
    Ok(Json(members))
}

/// `PUT /members/{id}`
///
/// Succeeds whether or not a member with this id exists.
pub async fn update_member(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(update): ValidatedJson<MemberUpdate>,
) -> Result<Json<MessageResponse>, AppError> {
    if update.is_empty() {
        return Ok(Json(MessageResponse::new("Member updated successfully")));
    }

    let changed = state.repo.update_member(id, &update).await?;
    if changed == 0 {
        warn!(member_id = id, "Update matched no member");
    } else {
        info!(member_id = id, "Member updated");
    }

    Ok(Json(MessageResponse::new("Member updated successfully")))
}

/// `DELETE /members/{id}`
pub async fn delete_member(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<Json<MessageResponse>, AppError> {
    if !state.repo.member_exists(id).await? || !state.repo.delete_member(id).await? {
        warn!(member_id = id, "Delete requested for unknown member");
        return Err(AppError::NotFound("Member not found!".into()));
    }
    info!(member_id = id, "Member deleted");

    Ok(Json(MessageResponse::new(format!(
        "Member id: {} has been deleted!",
        id
    ))))
}
