use std::sync::Arc;

use axum::Router;

use todo_api_rust::auth::token::TokenService;
use todo_api_rust::config::{AppConfig, DatabaseConfig, SecurityConfig, ServerConfig};
use todo_api_rust::database::Database;
use todo_api_rust::server::{app, AppState};

/// Signing secret shared by the test app and tests that mint their own tokens.
pub const TEST_SECRET: &str = "integration-test-secret-0123456789abcdef";

pub fn test_config() -> AppConfig {
    AppConfig {
        server: ServerConfig {
            port: 0,
            cors_origins: vec!["*".to_string()],
        },
        database: DatabaseConfig {
            // Never connected: these tests only exercise routes that are
            // rejected before any storage access
            url: "postgres://postgres@127.0.0.1:5432/todo_test".to_string(),
            max_connections: 1,
            connect_timeout_secs: 1,
        },
        security: SecurityConfig {
            jwt_secret: TEST_SECRET.to_string(),
            jwt_algorithm: "HS256".to_string(),
            jwt_expiry_days: 7,
        },
    }
}

pub fn test_state() -> AppState {
    let config = test_config();
    let tokens = TokenService::new(&config.security).expect("valid test security config");
    let db = Database::connect_lazy(&config.database).expect("lazy pool");

    AppState {
        config: Arc::new(config),
        tokens,
        db,
    }
}

pub fn test_app() -> Router {
    app(test_state())
}
