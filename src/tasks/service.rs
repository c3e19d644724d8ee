use std::sync::Arc;

use serde_json::{Map, Value};

use crate::error::AppError;
use crate::models::{NewTask, Task, TaskInput};
use crate::repository::TaskStore;
use crate::tasks::validation::{validate_new_task, validate_update};

/// Task operations for the authenticated owner, over the injected store.
pub struct TaskService {
    tasks: Arc<dyn TaskStore>,
}

impl TaskService {
    pub fn new(tasks: Arc<dyn TaskStore>) -> Self {
        Self { tasks }
    }

    /// Validates the input fields and persists a task owned by `user_id`.
    pub async fn create(&self, input: TaskInput, user_id: i32) -> Result<Task, AppError> {
        validate_new_task(&input)?;
        self.tasks.create_task(NewTask::new(input, user_id)).await
    }

    pub async fn list(&self, user_id: i32) -> Result<Vec<Task>, AppError> {
        self.tasks.get_tasks_by_user(user_id).await
    }

    /// Validates the partial-update object and applies it. The object must
    /// already carry the server-injected `id` and `user_id` keys.
    pub async fn update(&self, updates: &Map<String, Value>) -> Result<(), AppError> {
        let patch = validate_update(updates)?;
        self.tasks.update_task(&patch).await
    }

    pub async fn delete(&self, task_id: i32, user_id: i32) -> Result<(), AppError> {
        self.tasks.delete_task(task_id, user_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TaskPatch;
    use async_trait::async_trait;
    use chrono::Utc;
    use serde_json::json;
    use std::sync::Mutex;

    /// Records the calls that reach the store, so tests can assert what the
    /// validation layer let through.
    #[derive(Default)]
    struct RecordingStore {
        created: Mutex<Vec<NewTask>>,
        patches: Mutex<Vec<TaskPatch>>,
    }

    #[async_trait]
    impl TaskStore for RecordingStore {
        async fn create_task(&self, task: NewTask) -> Result<Task, AppError> {
            let created = Task {
                id: 1,
                user_id: task.user_id,
                title: task.title.clone(),
                description: task.description.clone(),
                status: task.status.clone(),
                created_at: Utc::now(),
            };
            self.created.lock().unwrap().push(task);
            Ok(created)
        }

        async fn get_tasks_by_user(&self, _user_id: i32) -> Result<Vec<Task>, AppError> {
            Ok(Vec::new())
        }

        async fn update_task(&self, patch: &TaskPatch) -> Result<(), AppError> {
            self.patches.lock().unwrap().push(patch.clone());
            Ok(())
        }

        async fn delete_task(&self, _task_id: i32, _user_id: i32) -> Result<(), AppError> {
            Err(AppError::NoRowsAffected)
        }
    }

    #[actix_rt::test]
    async fn test_create_gates_on_validation() {
        let store = Arc::new(RecordingStore::default());
        let service = TaskService::new(store.clone());

        let input = TaskInput {
            title: String::new(),
            description: String::new(),
            status: "done".to_string(),
        };
        assert!(service.create(input, 1).await.is_err());
        assert!(store.created.lock().unwrap().is_empty());

        let input = TaskInput {
            title: "write report".to_string(),
            description: String::new(),
            status: "todo".to_string(),
        };
        let task = service.create(input, 7).await.unwrap();
        assert_eq!(task.user_id, 7);
        assert_eq!(store.created.lock().unwrap().len(), 1);
    }

    #[actix_rt::test]
    async fn test_update_forwards_validated_patch() {
        let store = Arc::new(RecordingStore::default());
        let service = TaskService::new(store.clone());

        let updates = json!({ "id": 3, "user_id": 9, "title": "renamed" });
        service
            .update(updates.as_object().unwrap())
            .await
            .unwrap();

        let patches = store.patches.lock().unwrap();
        assert_eq!(patches.len(), 1);
        assert_eq!(patches[0].id, 3);
        assert_eq!(patches[0].user_id, 9);
        assert_eq!(patches[0].title.as_deref(), Some("renamed"));
        assert!(patches[0].description.is_none());
        assert!(patches[0].status.is_none());
    }

    #[actix_rt::test]
    async fn test_update_rejects_before_store() {
        let store = Arc::new(RecordingStore::default());
        let service = TaskService::new(store.clone());

        let updates = json!({ "id": 3, "user_id": 9, "owner": "mallory" });
        assert!(service.update(updates.as_object().unwrap()).await.is_err());
        assert!(store.patches.lock().unwrap().is_empty());
    }

    #[actix_rt::test]
    async fn test_delete_surfaces_no_rows() {
        let service = TaskService::new(Arc::new(RecordingStore::default()));
        assert!(matches!(
            service.delete(1, 1).await,
            Err(AppError::NoRowsAffected)
        ));
    }
}
