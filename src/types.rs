//! Request and response schemas for the HTTP API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

use crate::database::models::{Task, User};
use crate::error::ApiError;

pub const TITLE_MAX_LENGTH: usize = 200;
pub const DESCRIPTION_MAX_LENGTH: usize = 1000;

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub name: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            created_at: user.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: &'static str,
    pub expires_in: i64,
    pub user: UserResponse,
}

#[derive(Debug, Deserialize)]
pub struct TaskCreate {
    pub title: String,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TaskUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TaskListQuery {
    pub completed: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct TaskResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        Self {
            id: task.id,
            user_id: task.user_id,
            title: task.title,
            description: task.description,
            completed: task.completed,
            created_at: task.created_at,
            updated_at: task.updated_at,
        }
    }
}

/// Validate and normalize a task title: 1-200 characters after trimming.
pub fn validate_title(title: &str) -> Result<String, ApiError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(field_error("title", "Title cannot be empty"));
    }
    if title.chars().count() > TITLE_MAX_LENGTH {
        return Err(field_error("title", "Title too long (max 200 characters)"));
    }
    Ok(title.to_string())
}

/// Validate an optional task description: at most 1000 characters.
pub fn validate_description(description: Option<&str>) -> Result<Option<String>, ApiError> {
    match description {
        None => Ok(None),
        Some(description) => {
            if description.chars().count() > DESCRIPTION_MAX_LENGTH {
                return Err(field_error(
                    "description",
                    "Description too long (max 1000 characters)",
                ));
            }
            Ok(Some(description.to_string()))
        }
    }
}

fn field_error(field: &str, message: &str) -> ApiError {
    let mut field_errors = HashMap::new();
    field_errors.insert(field.to_string(), message.to_string());
    ApiError::validation_error("Invalid field value", Some(field_errors))
}
