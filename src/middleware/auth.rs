use axum::extract::{Request, State};
use axum::http::{header, HeaderMap};
use axum::middleware::Next;
use axum::response::Response;
use uuid::Uuid;

use crate::auth::token::Claims;
use crate::error::ApiError;
use crate::server::AppState;

/// Authenticated user context extracted from a verified bearer token.
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub user_id: Uuid,
    pub email: String,
}

/// Bearer-token authentication middleware.
///
/// Derives an identity purely from the Authorization header; no storage is
/// touched. Every failure mode (missing header, wrong scheme, expired,
/// invalid, identity-less token) is rejected as 401 with a bearer challenge.
/// The specific reason is logged, not leaked to the client.
pub async fn jwt_auth_middleware(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_bearer_token(&headers)?;

    let claims: Claims = state.tokens.verify(token)?;
    // verify() guarantees a parseable subject
    let user_id = claims.subject_id()?;

    request.extensions_mut().insert(AuthUser {
        user_id,
        email: claims.email,
    });

    Ok(next.run(request).await)
}

/// Extract the bearer credential from the Authorization header.
fn extract_bearer_token(headers: &HeaderMap) -> Result<&str, ApiError> {
    let auth_header = headers
        .get(header::AUTHORIZATION)
        .ok_or_else(|| ApiError::unauthorized("Missing Authorization header"))?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| ApiError::unauthorized("Invalid Authorization header format"))?;

    match auth_str.strip_prefix("Bearer ") {
        Some(token) if !token.trim().is_empty() => Ok(token),
        Some(_) => Err(ApiError::unauthorized("Empty bearer token")),
        None => Err(ApiError::unauthorized(
            "Authorization header must use Bearer scheme",
        )),
    }
}
