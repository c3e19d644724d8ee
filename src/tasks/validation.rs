//!
//! # Task validation
//!
//! Two gates in front of the storage layer: full-record checks for task
//! creation, and allow-list validation that turns a client-supplied JSON
//! object into a typed [`TaskPatch`]. The patch gate is what keeps the
//! dynamic UPDATE statement from ever being built out of untrusted keys.

use serde_json::{Map, Value};

use crate::error::{AppError, FieldError, FieldRule};
use crate::models::{TaskInput, TaskPatch};

pub const TITLE_MAX: usize = 100;
pub const STATUS_MAX: usize = 100;

/// Field checks for task creation: title and status must be non-empty and
/// within bounds; description is free-form. Each violation names the field
/// and the rule it broke.
pub fn validate_new_task(input: &TaskInput) -> Result<(), AppError> {
    if input.title.is_empty() {
        return Err(AppError::Validation(FieldError::new(
            "title",
            FieldRule::Blank,
        )));
    }
    if input.title.chars().count() > TITLE_MAX {
        return Err(AppError::Validation(FieldError::new(
            "title",
            FieldRule::TooLong { max: TITLE_MAX },
        )));
    }
    if input.status.is_empty() {
        return Err(AppError::Validation(FieldError::new(
            "status",
            FieldRule::Blank,
        )));
    }
    if input.status.chars().count() > STATUS_MAX {
        return Err(AppError::Validation(FieldError::new(
            "status",
            FieldRule::TooLong { max: STATUS_MAX },
        )));
    }
    Ok(())
}

/// Builds a [`TaskPatch`] from a partial-update object.
///
/// The handler injects `id` (path parameter) and `user_id` (authenticated
/// identity) into the object before calling this; both must be present.
/// Beyond those two, the patch must carry at least one updatable field, and
/// every key must come from the allow-list {title, description, status} —
/// an unknown key fails validation, it is never dropped silently.
pub fn validate_update(updates: &Map<String, Value>) -> Result<TaskPatch, AppError> {
    let id = require_int(updates, "id")?;
    let user_id = require_int(updates, "user_id")?;

    if updates.len() <= 2 {
        return Err(AppError::Validation(FieldError::new(
            "",
            FieldRule::NoFields,
        )));
    }

    let mut patch = TaskPatch {
        id,
        user_id,
        title: None,
        description: None,
        status: None,
    };

    for (key, value) in updates {
        let slot = match key.as_str() {
            "id" | "user_id" => continue,
            "title" => &mut patch.title,
            "description" => &mut patch.description,
            "status" => &mut patch.status,
            _ => {
                return Err(AppError::Validation(FieldError::new(
                    key,
                    FieldRule::NotAllowed,
                )))
            }
        };
        match value.as_str() {
            Some(text) => *slot = Some(text.to_string()),
            None => {
                return Err(AppError::Validation(FieldError::new(
                    key,
                    FieldRule::WrongType,
                )))
            }
        }
    }

    Ok(patch)
}

fn require_int(updates: &Map<String, Value>, field: &str) -> Result<i32, AppError> {
    match updates.get(field) {
        None => Err(AppError::Validation(FieldError::new(
            field,
            FieldRule::Missing,
        ))),
        Some(value) => match value.as_i64() {
            Some(n) => Ok(n as i32),
            None => Err(AppError::Validation(FieldError::new(
                field,
                FieldRule::WrongType,
            ))),
        },
    }
}
