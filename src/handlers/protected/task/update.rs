use axum::extract::{Path, State};
use axum::{Extension, Json};
use uuid::Uuid;

use super::{fetch_owned_task, task_repository};
use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::server::AppState;
use crate::types::{validate_description, validate_title, TaskResponse, TaskUpdate};

/// PUT /api/tasks/:id - update title and/or description (owner only)
///
/// Omitted fields keep their stored values; ownership and completion are not
/// touched by this endpoint. Concurrent updates are last-write-wins.
pub async fn task_put(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(payload): Json<TaskUpdate>,
) -> Result<Json<TaskResponse>, ApiError> {
    let task = fetch_owned_task(&state, id, auth.user_id).await?;

    let title = match payload.title.as_deref() {
        Some(title) => validate_title(title)?,
        None => task.title.clone(),
    };
    let description = match payload.description.as_deref() {
        Some(description) => validate_description(Some(description))?,
        None => task.description.clone(),
    };

    let updated = task_repository(&state)
        .update(task.id, &title, description.as_deref(), task.completed)
        .await?;

    Ok(Json(updated.into()))
}
