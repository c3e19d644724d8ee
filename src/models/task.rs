use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A task entity as stored in the database and returned by the API.
///
/// Every read and write is scoped by `user_id`; a task is visible only to
/// its owner.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Task {
    pub id: i32,
    /// Identifier of the user who owns the task.
    pub user_id: i32,
    pub title: String,
    pub description: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Input structure for creating a task.
///
/// Field rules (title/status non-empty and bounded) are enforced by
/// [`validate_new_task`](crate::tasks::validation::validate_new_task)
/// before the row is built.
#[derive(Debug, Serialize, Deserialize)]
pub struct TaskInput {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub status: String,
}

/// A task row ready for insertion; the owner comes from the authenticated
/// identity, never the client payload.
#[derive(Debug, Clone)]
pub struct NewTask {
    pub user_id: i32,
    pub title: String,
    pub description: String,
    pub status: String,
}

impl NewTask {
    pub fn new(input: TaskInput, user_id: i32) -> Self {
        Self {
            user_id,
            title: input.title,
            description: input.description,
            status: input.status,
        }
    }
}

/// A validated partial update for one task.
///
/// Built by [`validate_update`](crate::tasks::validation::validate_update)
/// from a client-supplied JSON object: `id` and `user_id` are injected
/// server-side, and only allow-listed fields can be populated, so the
/// storage layer assembles its update statement from these options alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskPatch {
    pub id: i32,
    pub user_id: i32,
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
}

impl TaskPatch {
    /// True when no updatable field is populated.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.status.is_none()
    }
}
