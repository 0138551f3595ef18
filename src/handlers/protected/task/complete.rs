use axum::extract::{Path, State};
use axum::{Extension, Json};
use uuid::Uuid;

use super::{fetch_owned_task, task_repository};
use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::server::AppState;
use crate::types::TaskResponse;

/// PATCH /api/tasks/:id/complete - toggle completion status (owner only)
pub async fn task_complete(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<TaskResponse>, ApiError> {
    let task = fetch_owned_task(&state, id, auth.user_id).await?;

    let updated = task_repository(&state)
        .update(
            task.id,
            &task.title,
            task.description.as_deref(),
            !task.completed,
        )
        .await?;

    Ok(Json(updated.into()))
}
