use std::sync::Arc;

use axum::extract::State;
use axum::http::HeaderValue;
use axum::response::IntoResponse;
use axum::routing::{get, patch, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::auth::token::TokenService;
use crate::config::{AppConfig, ServerConfig};
use crate::database::Database;
use crate::handlers::{protected, public};
use crate::middleware::jwt_auth_middleware;

/// Shared server state: immutable configuration, the token service built from
/// it, and the database pool. Constructed once in `main`, cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub tokens: TokenService,
    pub db: Database,
}

pub fn app(state: AppState) -> Router {
    let public_auth = Router::new()
        .route("/auth/signup", post(public::auth::signup_post))
        .route("/auth/login", post(public::auth::login_post));

    let protected_api = Router::new()
        .route("/auth/me", get(protected::auth::me_get))
        .route(
            "/tasks",
            get(protected::task::task_list).post(protected::task::task_post),
        )
        .route(
            "/tasks/:id",
            get(protected::task::task_get)
                .put(protected::task::task_put)
                .delete(protected::task::task_delete),
        )
        .route("/tasks/:id/complete", patch(protected::task::task_complete))
        .route_layer(axum::middleware::from_fn_with_state(
            state.clone(),
            jwt_auth_middleware,
        ));

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .nest("/api", public_auth.merge(protected_api))
        .layer(cors_layer(&state.config.server))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(config: &ServerConfig) -> CorsLayer {
    if config.cors_origins.iter().any(|o| o == "*") {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "success": true,
        "data": {
            "name": "Todo API (Rust)",
            "version": version,
            "description": "Task tracking backend with JWT authentication",
            "endpoints": {
                "home": "/ (public)",
                "health": "/health (public)",
                "signup": "POST /api/auth/signup (public)",
                "login": "POST /api/auth/login (public - token acquisition)",
                "me": "GET /api/auth/me (protected)",
                "tasks": "/api/tasks[/:id] (protected)",
            }
        }
    }))
}

async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    match state.db.health_check().await {
        Ok(_) => (
            axum::http::StatusCode::OK,
            Json(json!({
                "success": true,
                "data": {
                    "status": "ok",
                    "timestamp": now,
                    "database": "ok"
                }
            })),
        ),
        Err(e) => (
            axum::http::StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "success": false,
                "error": "database unavailable",
                "data": {
                    "status": "degraded",
                    "timestamp": now,
                    "database_error": e.to_string()
                }
            })),
        ),
    }
}
