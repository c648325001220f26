use crate::errors::{AppError, Result};
use dotenvy::dotenv;
use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  pub database_url: String,

  // Email provider (Resend-compatible HTTP API)
  pub email_api_url: String,
  pub email_api_key: String,
  pub email_sender: String,
  /// Inbox receiving the operator copy of every booking request.
  pub operator_email: String,

  // Admin basic auth
  pub admin_username: String,
  /// Argon2 hash of the admin password. Generate one with
  /// `services::auth::hash_password` and put it in the environment.
  pub admin_password_hash: String,

  // Media upload
  pub media_root: String,
  pub media_public_url: String,

  // Optional: populate an empty tours table on startup
  pub seed_db: bool,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present

    let get_env = |var_name: &str| {
      env::var(var_name).map_err(|e| AppError::Config(format!("Missing environment variable '{}': {}", var_name, e)))
    };

    let server_host = get_env("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let server_port = get_env("SERVER_PORT")
      .unwrap_or_else(|_| "8080".to_string())
      .parse::<u16>()
      .map_err(|e| AppError::Config(format!("Invalid SERVER_PORT: {}", e)))?;
    let database_url = get_env("DATABASE_URL")?;

    let email_api_url = get_env("EMAIL_API_URL").unwrap_or_else(|_| "https://api.resend.com/emails".to_string());
    let email_api_key = get_env("EMAIL_API_KEY")?;
    let email_sender = get_env("EMAIL_SENDER").unwrap_or_else(|_| "noreply@example.com".to_string());
    let operator_email = get_env("OPERATOR_EMAIL")?;

    let admin_username = get_env("ADMIN_USERNAME").unwrap_or_else(|_| "admin".to_string());
    let admin_password_hash = get_env("ADMIN_PASSWORD_HASH")?;

    let media_root = get_env("MEDIA_ROOT").unwrap_or_else(|_| "./media".to_string());
    let media_public_url = get_env("MEDIA_PUBLIC_URL")
      .unwrap_or_else(|_| format!("http://{}:{}/media", server_host, server_port));

    let seed_db = get_env("SEED_DB")
      .unwrap_or_else(|_| "false".to_string())
      .parse::<bool>()
      .map_err(|e| AppError::Config(format!("Invalid SEED_DB value: {}", e)))?;

    tracing::info!("Application configuration loaded successfully.");

    Ok(Self {
      server_host,
      server_port,
      database_url,
      email_api_url,
      email_api_key,
      email_sender,
      operator_email,
      admin_username,
      admin_password_hash,
      media_root,
      media_public_url,
      seed_db,
    })
  }
}
