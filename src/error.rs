//!
//! # Custom Error Handling
//!
//! This module defines the custom error type `AppError` used throughout the
//! application. It centralizes error management, providing a consistent way to
//! handle and represent the error conditions that can occur, from database
//! issues to validation failures.
//!
//! `AppError` implements `actix_web::error::ResponseError` to convert
//! application errors into HTTP responses with JSON bodies. Validation errors
//! expose only the offending field and the rule it broke; login failures
//! (`UserNotFound` vs `InvalidCredentials`) stay distinct values inside the
//! crate but render the same generic 401 body, so a caller cannot tell which
//! part of the credential check failed. Internal errors are logged with their
//! detail and answered with a generic 500 body.

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;
use std::fmt;
use validator::ValidationErrors;

/// The rule a field failed during validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldRule {
    /// Required field is empty.
    Blank,
    /// Value exceeds the maximum length.
    TooLong { max: usize },
    /// Required key is absent from the patch.
    Missing,
    /// Key is outside the allow-list.
    NotAllowed,
    /// Value has the wrong JSON type.
    WrongType,
    /// The patch carries nothing to update.
    NoFields,
}

/// A field-scoped validation failure: which field, which rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub rule: FieldRule,
}

impl FieldError {
    pub fn new(field: &str, rule: FieldRule) -> Self {
        Self {
            field: field.to_string(),
            rule,
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.rule {
            FieldRule::Blank => write!(f, "{} cannot be blank", self.field),
            FieldRule::TooLong { max } => write!(f, "{} too long (max {})", self.field, max),
            FieldRule::Missing => write!(f, "{} is required", self.field),
            FieldRule::NotAllowed => write!(f, "{} is not an allowed field", self.field),
            FieldRule::WrongType => write!(f, "{} has the wrong type", self.field),
            FieldRule::NoFields => write!(f, "no fields to update"),
        }
    }
}

/// Represents all possible errors that can occur within the application.
#[derive(Debug)]
pub enum AppError {
    /// Field-scoped validation failure (HTTP 400).
    Validation(FieldError),
    /// Malformed or invalid request payload (HTTP 400).
    BadRequest(String),
    /// Registration with a username that is already taken (HTTP 400).
    DuplicateUser,
    /// Login with an unknown username (HTTP 401, generic body).
    UserNotFound,
    /// Login with a wrong password (HTTP 401, generic body).
    InvalidCredentials,
    /// Missing, malformed, or failed bearer credential (HTTP 401).
    Unauthorized(String),
    /// An update or delete matched no row for the given id/owner pair
    /// (HTTP 400, "not found or not yours").
    NoRowsAffected,
    /// Error originating from the storage layer (HTTP 500, detail logged).
    Database(String),
    /// Any other unexpected server-side error (HTTP 500, detail logged).
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::Validation(err) => write!(f, "Validation failed: {}", err),
            AppError::BadRequest(msg) => write!(f, "Bad Request: {}", msg),
            AppError::DuplicateUser => write!(f, "Username already taken"),
            AppError::UserNotFound => write!(f, "Username not found"),
            AppError::InvalidCredentials => write!(f, "Invalid credentials"),
            AppError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            AppError::NoRowsAffected => write!(f, "No rows affected"),
            AppError::Database(msg) => write!(f, "Database Error: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal Server Error: {}", msg),
        }
    }
}

/// Converts `AppError` variants into `HttpResponse` objects.
///
/// Actix uses this to translate `AppError` results from handlers (and from
/// the auth guard) into the right status codes and JSON error bodies.
impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_)
            | AppError::BadRequest(_)
            | AppError::DuplicateUser
            | AppError::NoRowsAffected => StatusCode::BAD_REQUEST,
            AppError::UserNotFound
            | AppError::InvalidCredentials
            | AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::Validation(err) => HttpResponse::BadRequest().json(json!({
                "error": err.to_string()
            })),
            AppError::BadRequest(msg) => HttpResponse::BadRequest().json(json!({
                "error": msg
            })),
            AppError::DuplicateUser => HttpResponse::BadRequest().json(json!({
                "error": "username already taken"
            })),
            // Both credential failures answer with one identical body so the
            // response does not reveal whether the username exists.
            AppError::UserNotFound | AppError::InvalidCredentials => {
                HttpResponse::Unauthorized().json(json!({
                    "error": "invalid credentials"
                }))
            }
            AppError::Unauthorized(msg) => HttpResponse::Unauthorized().json(json!({
                "error": msg
            })),
            AppError::NoRowsAffected => HttpResponse::BadRequest().json(json!({
                "error": "task not found or not yours"
            })),
            AppError::Database(msg) => {
                log::error!("database error: {}", msg);
                HttpResponse::InternalServerError().json(json!({
                    "error": "server side error"
                }))
            }
            AppError::Internal(msg) => {
                log::error!("internal error: {}", msg);
                HttpResponse::InternalServerError().json(json!({
                    "error": "server side error"
                }))
            }
        }
    }
}

/// Converts `sqlx::Error` into `AppError::Database`.
impl From<sqlx::Error> for AppError {
    fn from(error: sqlx::Error) -> AppError {
        AppError::Database(error.to_string())
    }
}

/// Converts `validator::ValidationErrors` into `AppError::BadRequest`.
///
/// Used for request DTO validation (register/login payloads); the validator
/// messages name only the field and rule.
impl From<ValidationErrors> for AppError {
    fn from(error: ValidationErrors) -> AppError {
        AppError::BadRequest(error.to_string())
    }
}

/// Converts `jsonwebtoken::errors::Error` into `AppError::Unauthorized`.
impl From<jsonwebtoken::errors::Error> for AppError {
    fn from(error: jsonwebtoken::errors::Error) -> AppError {
        match error.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                AppError::Unauthorized("token expired".into())
            }
            _ => AppError::Unauthorized("invalid token".into()),
        }
    }
}

/// Converts `bcrypt::BcryptError` into `AppError::Internal`.
///
/// Hashing failure (RNG or algorithm) is fatal to the calling operation.
impl From<bcrypt::BcryptError> for AppError {
    fn from(error: bcrypt::BcryptError) -> AppError {
        AppError::Internal(format!("password hashing failed: {}", error))
    }
}
