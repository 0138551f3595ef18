use axum::extract::{Path, State};
use axum::{Extension, Json};
use uuid::Uuid;

use super::fetch_owned_task;
use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::server::AppState;
use crate::types::TaskResponse;

/// GET /api/tasks/:id - show a single task (owner only)
pub async fn task_get(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<TaskResponse>, ApiError> {
    let task = fetch_owned_task(&state, id, auth.user_id).await?;
    Ok(Json(task.into()))
}
