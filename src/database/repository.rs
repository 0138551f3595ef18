use sqlx::PgPool;
use uuid::Uuid;

use crate::database::manager::DatabaseError;
use crate::database::models::{Task, User};

/// Account storage. Contact addresses are case-folded here, at the storage
/// boundary, for both writes and lookups so that two addresses differing only
/// in case can never coexist.
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        email: &str,
        name: Option<&str>,
        password_hash: Option<&str>,
    ) -> Result<User, DatabaseError> {
        let result = sqlx::query_as::<_, User>(
            "INSERT INTO users (id, email, name, password_hash)
             VALUES ($1, $2, $3, $4)
             RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(email.to_lowercase())
        .bind(name)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(user) => Ok(user),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                Err(DatabaseError::Conflict("Email already registered".to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DatabaseError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
            .bind(email.to_lowercase())
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DatabaseError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }
}

/// Task storage. Reads by id are deliberately unscoped: the ownership check
/// happens above this layer so that Forbidden and NotFound stay distinct.
pub struct TaskRepository {
    pool: PgPool,
}

impl TaskRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        owner: Uuid,
        title: &str,
        description: Option<&str>,
    ) -> Result<Task, DatabaseError> {
        let task = sqlx::query_as::<_, Task>(
            "INSERT INTO tasks (id, user_id, title, description)
             VALUES ($1, $2, $3, $4)
             RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(owner)
        .bind(title)
        .bind(description)
        .fetch_one(&self.pool)
        .await?;
        Ok(task)
    }

    pub async fn list(
        &self,
        owner: Uuid,
        completed: Option<bool>,
    ) -> Result<Vec<Task>, DatabaseError> {
        let tasks = match completed {
            Some(completed) => {
                sqlx::query_as::<_, Task>(
                    "SELECT * FROM tasks
                     WHERE user_id = $1 AND completed = $2
                     ORDER BY created_at",
                )
                .bind(owner)
                .bind(completed)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Task>(
                    "SELECT * FROM tasks WHERE user_id = $1 ORDER BY created_at",
                )
                .bind(owner)
                .fetch_all(&self.pool)
                .await?
            }
        };
        Ok(tasks)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Task>, DatabaseError> {
        let task = sqlx::query_as::<_, Task>("SELECT * FROM tasks WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(task)
    }

    /// Write back mutable fields. `user_id` is not part of the statement:
    /// ownership never changes after creation. Concurrent updates to the same
    /// row are last-write-wins.
    pub async fn update(
        &self,
        id: Uuid,
        title: &str,
        description: Option<&str>,
        completed: bool,
    ) -> Result<Task, DatabaseError> {
        let task = sqlx::query_as::<_, Task>(
            "UPDATE tasks
             SET title = $2, description = $3, completed = $4, updated_at = now()
             WHERE id = $1
             RETURNING *",
        )
        .bind(id)
        .bind(title)
        .bind(description)
        .bind(completed)
        .fetch_one(&self.pool)
        .await?;
        Ok(task)
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, DatabaseError> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
