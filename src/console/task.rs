use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaskError {
    #[error("Title cannot be empty")]
    EmptyTitle,

    #[error("Title too long (max 200 characters)")]
    TitleTooLong,

    #[error("Description too long (max 1000 characters)")]
    DescriptionTooLong,
}

/// A single todo entry. Construction validates and trims the text fields.
#[derive(Debug, Clone)]
pub struct Task {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl Task {
    pub fn new(id: u64, title: &str, description: &str) -> Result<Self, TaskError> {
        Ok(Self {
            id,
            title: validate_title(title)?,
            description: validate_description(description)?,
            completed: false,
            created_at: Utc::now(),
        })
    }
}

impl std::fmt::Display for Task {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let marker = if self.completed { '✓' } else { '○' };
        write!(f, "[{}] {}. {}", marker, self.id, self.title)
    }
}

pub(crate) fn validate_title(title: &str) -> Result<String, TaskError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(TaskError::EmptyTitle);
    }
    if title.chars().count() > 200 {
        return Err(TaskError::TitleTooLong);
    }
    Ok(title.to_string())
}

pub(crate) fn validate_description(description: &str) -> Result<String, TaskError> {
    let description = description.trim();
    if description.chars().count() > 1000 {
        return Err(TaskError::DescriptionTooLong);
    }
    Ok(description.to_string())
}
