use axum::extract::{Query, State};
use axum::{Extension, Json};

use super::task_repository;
use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::server::AppState;
use crate::types::{TaskListQuery, TaskResponse};

/// GET /api/tasks - list the requester's tasks, optionally filtered by
/// completion status. Other accounts' tasks are never visible here.
pub async fn task_list(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Query(query): Query<TaskListQuery>,
) -> Result<Json<Vec<TaskResponse>>, ApiError> {
    let tasks = task_repository(&state)
        .list(auth.user_id, query.completed)
        .await?;

    Ok(Json(tasks.into_iter().map(TaskResponse::from).collect()))
}
