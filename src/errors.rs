use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Validation Error: {0}")]
  Validation(String),

  #[error("Authentication Failed: {0}")]
  Auth(String),

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Database Error: {0}")]
  Database(#[from] sqlx::Error),

  #[error("Email Provider Error: {0}")]
  Email(String),

  #[error("Internal Server Error: {0}")]
  Internal(String),
}

// Bridge for handlers that use `?` on functions returning anyhow::Result.
impl From<anyhow::Error> for AppError {
  fn from(err: anyhow::Error) -> Self {
    if err.is::<sqlx::Error>() {
      return match err.downcast::<sqlx::Error>() {
        Ok(db_err) => AppError::Database(db_err),
        Err(other) => AppError::Internal(other.to_string()),
      };
    }
    AppError::Internal(err.to_string())
  }
}

impl ResponseError for AppError {
  fn error_response(&self) -> HttpResponse {
    // Log the full error when it's turned into a response; clients get the
    // opaque variants for anything touching the database or the mailer.
    tracing::error!(application_error = %self, "Responding with error");
    match self {
      AppError::Validation(m) => {
        HttpResponse::BadRequest().json(json!({"success": false, "error": m}))
      }
      AppError::Auth(m) => HttpResponse::Unauthorized().json(json!({"error": m})),
      AppError::NotFound(m) => HttpResponse::NotFound().json(json!({"error": m})),
      AppError::Config(m) => {
        HttpResponse::InternalServerError().json(json!({"error": "Configuration issue", "detail": m}))
      }
      AppError::Database(_) => HttpResponse::InternalServerError()
        .json(json!({"success": false, "error": "Database operation failed"})),
      AppError::Email(_) => {
        HttpResponse::InternalServerError().json(json!({"error": "Email service error"}))
      }
      AppError::Internal(_) => {
        HttpResponse::InternalServerError().json(json!({"error": "An internal error occurred"}))
      }
    }
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
