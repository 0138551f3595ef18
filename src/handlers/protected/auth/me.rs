use axum::extract::State;
use axum::{Extension, Json};

use crate::database::repository::UserRepository;
use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::server::AppState;
use crate::types::UserResponse;

/// GET /api/auth/me - return the authenticated account
///
/// The identity comes from the verified token; the account row can still be
/// gone if it was deleted after issuance.
pub async fn me_get(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Result<Json<UserResponse>, ApiError> {
    let users = UserRepository::new(state.db.pool().clone());

    let user = users
        .find_by_id(auth.user_id)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    Ok(Json(user.into()))
}
