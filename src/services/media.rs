//! Media storage for the admin dashboard: an uploaded image body is written
//! under the configured media root with a generated filename and the public
//! URL is returned for use as a tour's `image_url` or gallery entry.

use std::path::{Path, PathBuf};

use tracing::{info, instrument};
use uuid::Uuid;

use crate::errors::{AppError, Result};

#[derive(Debug, Clone)]
pub struct MediaStore {
  root: PathBuf,
  public_url: String,
}

#[derive(Debug, serde::Serialize)]
pub struct StoredMedia {
  pub file_name: String,
  pub public_url: String,
}

impl MediaStore {
  pub fn new(root: impl Into<PathBuf>, public_url: String) -> Self {
    Self {
      root: root.into(),
      public_url: public_url.trim_end_matches('/').to_string(),
    }
  }

  /// Persist one uploaded file. The original name is only used for its
  /// extension; the stored name is a fresh UUID so uploads never collide.
  #[instrument(name = "media::store", skip(self, bytes), fields(size = bytes.len()))]
  pub async fn store(&self, original_name: &str, bytes: &[u8]) -> Result<StoredMedia> {
    if bytes.is_empty() {
      return Err(AppError::Validation("No file provided.".to_string()));
    }

    let extension = Path::new(original_name)
      .extension()
      .and_then(|e| e.to_str())
      .filter(|e| e.chars().all(|c| c.is_ascii_alphanumeric()))
      .unwrap_or("bin");
    let file_name = format!("{}.{}", Uuid::new_v4(), extension);

    tokio::fs::create_dir_all(&self.root)
      .await
      .map_err(|e| AppError::Internal(format!("Failed to create media directory: {}", e)))?;
    tokio::fs::write(self.root.join(&file_name), bytes)
      .await
      .map_err(|e| AppError::Internal(format!("Failed to store media file: {}", e)))?;

    let public_url = format!("{}/{}", self.public_url, file_name);
    info!(%file_name, "Media file stored");

    Ok(StoredMedia { file_name, public_url })
  }
}
