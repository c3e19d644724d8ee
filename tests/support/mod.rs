//! In-memory implementations of the store traits, so the integration tests
//! exercise the full HTTP stack without a database.

use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use tasklane::error::AppError;
use tasklane::models::{NewTask, Task, TaskPatch, User};
use tasklane::repository::{TaskStore, UserStore};

#[derive(Default)]
pub struct MemoryUsers {
    users: Mutex<Vec<User>>,
}

#[async_trait]
impl UserStore for MemoryUsers {
    async fn create_user(&self, username: &str, password_hash: &str) -> Result<User, AppError> {
        let mut users = self.users.lock().unwrap();
        // Stands in for the unique constraint on username.
        if users.iter().any(|u| u.username == username) {
            return Err(AppError::DuplicateUser);
        }
        let user = User {
            id: users.len() as i32 + 1,
            username: username.to_string(),
            password_hash: password_hash.to_string(),
            created_at: Utc::now(),
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn user_exists(&self, username: &str) -> Result<bool, AppError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().any(|u| u.username == username))
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.username == username).cloned())
    }
}

pub struct MemoryTasks {
    tasks: Mutex<Vec<Task>>,
    next_id: AtomicI32,
}

impl Default for MemoryTasks {
    fn default() -> Self {
        Self {
            tasks: Mutex::new(Vec::new()),
            next_id: AtomicI32::new(1),
        }
    }
}

#[async_trait]
impl TaskStore for MemoryTasks {
    async fn create_task(&self, task: NewTask) -> Result<Task, AppError> {
        let created = Task {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            user_id: task.user_id,
            title: task.title,
            description: task.description,
            status: task.status,
            created_at: Utc::now(),
        };
        self.tasks.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn get_tasks_by_user(&self, user_id: i32) -> Result<Vec<Task>, AppError> {
        let tasks = self.tasks.lock().unwrap();
        Ok(tasks
            .iter()
            .filter(|t| t.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn update_task(&self, patch: &TaskPatch) -> Result<(), AppError> {
        let mut tasks = self.tasks.lock().unwrap();
        let task = tasks
            .iter_mut()
            .find(|t| t.id == patch.id && t.user_id == patch.user_id);
        match task {
            Some(task) => {
                if let Some(title) = &patch.title {
                    task.title = title.clone();
                }
                if let Some(description) = &patch.description {
                    task.description = description.clone();
                }
                if let Some(status) = &patch.status {
                    task.status = status.clone();
                }
                Ok(())
            }
            None => Err(AppError::NoRowsAffected),
        }
    }

    async fn delete_task(&self, task_id: i32, user_id: i32) -> Result<(), AppError> {
        let mut tasks = self.tasks.lock().unwrap();
        let before = tasks.len();
        tasks.retain(|t| !(t.id == task_id && t.user_id == user_id));
        if tasks.len() == before {
            return Err(AppError::NoRowsAffected);
        }
        Ok(())
    }
}
