//! Request extractors. The only one today is the admin guard.

use std::future::{ready, Ready};

use actix_web::{dev::Payload, web, FromRequest, HttpRequest};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};

use crate::errors::AppError;
use crate::services::auth::verify_password;
use crate::state::AppState;

/// Proof that the request carried valid admin credentials (HTTP Basic auth
/// against the configured username and Argon2 password hash). Handlers that
/// take this extractor are admin-only; failures become 401 responses.
#[derive(Debug, Clone)]
pub struct AdminUser {
  pub username: String,
}

impl FromRequest for AdminUser {
  type Error = AppError;
  type Future = Ready<Result<Self, Self::Error>>;

  fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
    ready(authenticate(req))
  }
}

fn authenticate(req: &HttpRequest) -> Result<AdminUser, AppError> {
  let state = req
    .app_data::<web::Data<AppState>>()
    .ok_or_else(|| AppError::Internal("AppState missing from request data.".to_string()))?;

  let header = req
    .headers()
    .get("Authorization")
    .and_then(|v| v.to_str().ok())
    .ok_or_else(|| AppError::Auth("Missing Authorization header.".to_string()))?;

  let encoded = header
    .strip_prefix("Basic ")
    .ok_or_else(|| AppError::Auth("Expected Basic authentication.".to_string()))?;

  let decoded = BASE64
    .decode(encoded)
    .ok()
    .and_then(|bytes| String::from_utf8(bytes).ok())
    .ok_or_else(|| AppError::Auth("Malformed Basic credentials.".to_string()))?;

  let (username, password) = decoded
    .split_once(':')
    .ok_or_else(|| AppError::Auth("Malformed Basic credentials.".to_string()))?;

  if username != state.config.admin_username
    || !verify_password(&state.config.admin_password_hash, password)?
  {
    tracing::warn!(username, "Rejected admin credentials");
    return Err(AppError::Auth("Invalid admin credentials.".to_string()));
  }

  Ok(AdminUser {
    username: username.to_string(),
  })
}
