use axum::extract::State;
use axum::Json;
use tracing::{info, warn};

use crate::auth::password::verify_password;
use crate::database::repository::UserRepository;
use crate::error::ApiError;
use crate::server::AppState;
use crate::types::{LoginRequest, LoginResponse};

/// POST /api/auth/login - verify credentials and issue a bearer token
///
/// Unknown email, an account without a stored credential, and a password
/// mismatch all produce the same 401; the precise cause is only logged.
pub async fn login_post(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let users = UserRepository::new(state.db.pool().clone());

    let user = match users.find_by_email(&payload.email).await? {
        Some(user) => user,
        None => {
            warn!("Login failed: email not found");
            return Err(invalid_credentials());
        }
    };

    // Accounts provisioned by an external identity provider have no hash
    let stored_hash = match user.password_hash.as_deref() {
        Some(hash) => hash,
        None => {
            warn!("Login failed: account has no password credential (id={})", user.id);
            return Err(invalid_credentials());
        }
    };

    // A corrupt stored hash propagates as an internal error here, it is
    // never folded into the mismatch path
    if !verify_password(&payload.password, stored_hash)? {
        warn!("Login failed: password mismatch (id={})", user.id);
        return Err(invalid_credentials());
    }

    let access_token = state.tokens.issue(user.id, &user.email)?;

    info!("Login success: id={}", user.id);
    Ok(Json(LoginResponse {
        access_token,
        token_type: "bearer",
        expires_in: state.tokens.expiry_seconds(),
        user: user.into(),
    }))
}

fn invalid_credentials() -> ApiError {
    ApiError::unauthorized("Invalid credentials")
}
