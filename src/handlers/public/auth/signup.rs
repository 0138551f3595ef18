use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use tracing::info;

use super::utils::{validate_email_format, validate_password_length};
use crate::auth::password::hash_password;
use crate::database::repository::UserRepository;
use crate::error::ApiError;
use crate::server::AppState;
use crate::types::{SignupRequest, UserResponse};

/// POST /api/auth/signup - register a new account
///
/// The email is lower-cased before storage so addresses differing only in
/// case collide; a duplicate is a 409 backed by the unique constraint. The
/// response never includes the credential hash.
pub async fn signup_post(
    State(state): State<AppState>,
    Json(payload): Json<SignupRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    validate_email_format(&payload.email)?;
    validate_password_length(&payload.password)?;

    let password_hash = hash_password(&payload.password)?;

    let users = UserRepository::new(state.db.pool().clone());
    let user = users
        .create(
            &payload.email,
            payload.name.as_deref(),
            Some(&password_hash),
        )
        .await?;

    info!("User signup success: email={} id={}", user.email, user.id);
    Ok((StatusCode::CREATED, Json(user.into())))
}
