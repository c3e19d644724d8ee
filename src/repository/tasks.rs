use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;

use super::TaskStore;
use crate::error::{AppError, FieldError, FieldRule};
use crate::models::{NewTask, Task, TaskPatch};

/// Postgres-backed task store.
pub struct PgTaskStore {
    pool: PgPool,
}

impl PgTaskStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Assembles the UPDATE statement for a patch. SET clauses come only from
/// the fields the validator populated; the trailing placeholders are the
/// id/owner pair.
fn update_sql(patch: &TaskPatch) -> String {
    let mut sets: Vec<String> = Vec::new();
    let mut param = 1;

    if patch.title.is_some() {
        sets.push(format!("title = ${}", param));
        param += 1;
    }
    if patch.description.is_some() {
        sets.push(format!("description = ${}", param));
        param += 1;
    }
    if patch.status.is_some() {
        sets.push(format!("status = ${}", param));
        param += 1;
    }

    format!(
        "UPDATE tasks SET {} WHERE id = ${} AND user_id = ${}",
        sets.join(", "),
        param,
        param + 1
    )
}

#[async_trait]
impl TaskStore for PgTaskStore {
    async fn create_task(&self, task: NewTask) -> Result<Task, AppError> {
        let created = sqlx::query_as::<_, Task>(
            "INSERT INTO tasks (user_id, title, description, status, created_at)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id, user_id, title, description, status, created_at",
        )
        .bind(task.user_id)
        .bind(&task.title)
        .bind(&task.description)
        .bind(&task.status)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;
        Ok(created)
    }

    async fn get_tasks_by_user(&self, user_id: i32) -> Result<Vec<Task>, AppError> {
        let tasks = sqlx::query_as::<_, Task>(
            "SELECT id, user_id, title, description, status, created_at
             FROM tasks WHERE user_id = $1
             ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(tasks)
    }

    async fn update_task(&self, patch: &TaskPatch) -> Result<(), AppError> {
        if patch.is_empty() {
            return Err(AppError::Validation(FieldError::new(
                "",
                FieldRule::NoFields,
            )));
        }

        let sql = update_sql(patch);
        let mut query = sqlx::query(&sql);
        if let Some(title) = &patch.title {
            query = query.bind(title);
        }
        if let Some(description) = &patch.description {
            query = query.bind(description);
        }
        if let Some(status) = &patch.status {
            query = query.bind(status);
        }

        let result = query
            .bind(patch.id)
            .bind(patch.user_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NoRowsAffected);
        }

        Ok(())
    }

    async fn delete_task(&self, task_id: i32, user_id: i32) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1 AND user_id = $2")
            .bind(task_id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NoRowsAffected);
        }

        Ok(())
    }
}
