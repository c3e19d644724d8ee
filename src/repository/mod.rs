//!
//! # Persistence boundary
//!
//! Capability traits for the relational store, plus one Postgres
//! implementation of each. Services hold the traits (`Arc<dyn ...>`), so an
//! in-memory fake substitutes in tests without touching a database.

pub mod tasks;
pub mod users;

pub use tasks::PgTaskStore;
pub use users::PgUserStore;

use async_trait::async_trait;

use crate::error::AppError;
use crate::models::{NewTask, Task, TaskPatch, User};

/// Storage operations over user rows.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Inserts a user. A username collision (unique constraint) surfaces as
    /// `AppError::DuplicateUser`.
    async fn create_user(&self, username: &str, password_hash: &str) -> Result<User, AppError>;

    async fn user_exists(&self, username: &str) -> Result<bool, AppError>;

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, AppError>;
}

/// Storage operations over task rows. Everything is scoped by the owning
/// user id.
#[async_trait]
pub trait TaskStore: Send + Sync {
    async fn create_task(&self, task: NewTask) -> Result<Task, AppError>;

    async fn get_tasks_by_user(&self, user_id: i32) -> Result<Vec<Task>, AppError>;

    /// Applies a validated patch. Fails with `AppError::NoRowsAffected` when
    /// the id/owner pair matches no row.
    async fn update_task(&self, patch: &TaskPatch) -> Result<(), AppError>;

    /// Fails with `AppError::NoRowsAffected` when the id/owner pair matches
    /// no row.
    async fn delete_task(&self, task_id: i32, user_id: i32) -> Result<(), AppError>;
}
