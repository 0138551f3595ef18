mod complete;
mod create;
mod delete;
mod list;
mod show;
mod update;

pub use complete::task_complete;
pub use create::task_post;
pub use delete::task_delete;
pub use list::task_list;
pub use show::task_get;
pub use update::task_put;

use uuid::Uuid;

use crate::auth::ownership::{authorize_resource_access, ResourceAccess};
use crate::database::models::Task;
use crate::database::repository::TaskRepository;
use crate::error::ApiError;
use crate::server::AppState;

pub(crate) fn task_repository(state: &AppState) -> TaskRepository {
    TaskRepository::new(state.db.pool().clone())
}

/// Look up a task and enforce owner isolation.
///
/// A missing row is 404 before ownership is considered; a row owned by
/// someone else is 403 (existence is revealed, access is not).
pub(crate) async fn fetch_owned_task(
    state: &AppState,
    id: Uuid,
    requester: Uuid,
) -> Result<Task, ApiError> {
    let task = task_repository(state).find_by_id(id).await?;

    match authorize_resource_access(task.as_ref().map(|t| t.user_id), requester) {
        ResourceAccess::Forbidden => Err(ApiError::forbidden("You do not have access to this task")),
        ResourceAccess::NotFound => Err(ApiError::not_found("Task not found")),
        ResourceAccess::Allowed => {
            task.ok_or_else(|| ApiError::not_found("Task not found"))
        }
    }
}
