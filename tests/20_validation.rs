mod common;

use anyhow::Result;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

async fn body_json(response: axum::response::Response) -> Result<Value> {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    Ok(serde_json::from_slice(&bytes)?)
}

fn post_json(uri: &str, payload: Value, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::from(payload.to_string())).unwrap()
}

#[tokio::test]
async fn signup_rejects_malformed_email() -> Result<()> {
    let app = common::test_app();

    let res = app
        .oneshot(post_json(
            "/api/auth/signup",
            json!({"email": "not-an-email", "password": "secret123456"}),
            None,
        ))
        .await?;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = body_json(res).await?;
    assert_eq!(body["message"], "Invalid email format");
    Ok(())
}

#[tokio::test]
async fn signup_rejects_short_password() -> Result<()> {
    let app = common::test_app();

    let res = app
        .oneshot(post_json(
            "/api/auth/signup",
            json!({"email": "user@example.com", "password": "short"}),
            None,
        ))
        .await?;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn task_create_rejects_empty_title() -> Result<()> {
    // Validation runs after authentication but before any storage access,
    // so a real token with an empty title gets a 400 from the running app
    let state = common::test_state();
    let app = todo_api_rust::server::app(state.clone());

    let token = state.tokens.issue(Uuid::new_v4(), "user@example.com").unwrap();
    let res = app
        .oneshot(post_json(
            "/api/tasks",
            json!({"title": "   "}),
            Some(&token),
        ))
        .await?;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = body_json(res).await?;
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert!(body["field_errors"]["title"].is_string());
    Ok(())
}

#[tokio::test]
async fn task_create_rejects_oversized_fields() -> Result<()> {
    let state = common::test_state();
    let token = state.tokens.issue(Uuid::new_v4(), "user@example.com").unwrap();

    let cases = vec![
        json!({"title": "x".repeat(201)}),
        json!({"title": "Valid", "description": "x".repeat(1001)}),
    ];

    for payload in cases {
        let app = todo_api_rust::server::app(state.clone());
        let res = app
            .oneshot(post_json("/api/tasks", payload, Some(&token)))
            .await?;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }
    Ok(())
}

#[tokio::test]
async fn task_routes_reject_non_uuid_ids() -> Result<()> {
    let state = common::test_state();
    let app = todo_api_rust::server::app(state.clone());

    let token = state.tokens.issue(Uuid::new_v4(), "user@example.com").unwrap();
    let res = app
        .oneshot(
            Request::builder()
                .uri("/api/tasks/not-a-uuid")
                .header(header::AUTHORIZATION, format!("Bearer {token}"))
                .body(Body::empty())?,
        )
        .await?;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    Ok(())
}
