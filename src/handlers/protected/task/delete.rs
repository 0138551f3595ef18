use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Extension;
use uuid::Uuid;

use super::{fetch_owned_task, task_repository};
use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::server::AppState;

/// DELETE /api/tasks/:id - delete a task (owner only), 204 on success
pub async fn task_delete(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let task = fetch_owned_task(&state, id, auth.user_id).await?;

    task_repository(&state).delete(task.id).await?;

    Ok(StatusCode::NO_CONTENT)
}
