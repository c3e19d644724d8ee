use crate::{auth::AuthenticatedUser, error::AppError, models::TaskInput, tasks::TaskService};
use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use serde_json::{Map, Value};

/// Retrieves the authenticated user's tasks, newest first.
#[get("")]
pub async fn get_tasks(
    service: web::Data<TaskService>,
    user: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    let tasks = service.list(user.0).await?;
    Ok(HttpResponse::Ok().json(tasks))
}

/// Creates a task owned by the authenticated user.
///
/// Expects a JSON body with `title`, `status`, and an optional
/// `description`. Field violations answer 400 naming the field and rule.
#[post("")]
pub async fn create_task(
    service: web::Data<TaskService>,
    task_data: web::Json<TaskInput>,
    user: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    let task = service.create(task_data.into_inner(), user.0).await?;
    Ok(HttpResponse::Created().json(task))
}

/// Applies a partial update to one of the authenticated user's tasks.
///
/// The body is a JSON object restricted to {title, description, status}.
/// Answers 400 on validation failure and on an id that does not exist or
/// belongs to someone else.
#[put("/{id}")]
pub async fn update_task(
    service: web::Data<TaskService>,
    task_id: web::Path<i32>,
    updates: web::Json<Map<String, Value>>,
    user: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    let mut updates = updates.into_inner();

    // The target id and the owner come from the path and the verified
    // token; anything the client put under these keys is discarded.
    updates.insert("id".to_string(), Value::from(task_id.into_inner()));
    updates.insert("user_id".to_string(), Value::from(user.0));

    service.update(&updates).await?;
    Ok(HttpResponse::Ok().finish())
}

/// Deletes one of the authenticated user's tasks.
#[delete("/{id}")]
pub async fn delete_task(
    service: web::Data<TaskService>,
    task_id: web::Path<i32>,
    user: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    service.delete(task_id.into_inner(), user.0).await?;
    Ok(HttpResponse::NoContent().finish())
}
