use std::sync::Arc;

use todo_api_rust::auth::token::TokenService;
use todo_api_rust::config::AppConfig;
use todo_api_rust::database::Database;
use todo_api_rust::server::{app, AppState};

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todo_api_rust=info,tower_http=info".into()),
        )
        .init();

    // A weak secret or broken configuration must stop the process here,
    // before it can serve a single request
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration error: {e}");
            std::process::exit(1);
        }
    };

    let tokens = match TokenService::new(&config.security) {
        Ok(tokens) => tokens,
        Err(e) => {
            tracing::error!("Configuration error: {e}");
            std::process::exit(1);
        }
    };

    let db = match Database::connect(&config.database).await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!("Database connection failed: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = db.ensure_schema().await {
        tracing::error!("Schema bootstrap failed: {e}");
        std::process::exit(1);
    }

    let port = config.server.port;
    let state = AppState {
        config: Arc::new(config),
        tokens,
        db,
    };

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    tracing::info!("Todo API server listening on http://{}", bind_addr);

    axum::serve(listener, app(state)).await.expect("server");
}
