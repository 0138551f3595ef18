use axum::extract::State;
use axum::http::StatusCode;
use axum::{Extension, Json};

use super::task_repository;
use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::server::AppState;
use crate::types::{validate_description, validate_title, TaskCreate, TaskResponse};

/// POST /api/tasks - create a task owned by the requester
///
/// The owner is always the authenticated identity; the payload cannot name
/// one.
pub async fn task_post(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Json(payload): Json<TaskCreate>,
) -> Result<(StatusCode, Json<TaskResponse>), ApiError> {
    let title = validate_title(&payload.title)?;
    let description = validate_description(payload.description.as_deref())?;

    let task = task_repository(&state)
        .create(auth.user_id, &title, description.as_deref())
        .await?;

    Ok((StatusCode::CREATED, Json(task.into())))
}
