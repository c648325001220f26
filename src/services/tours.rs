//! Tour catalog reads and the administrator write path.
//!
//! Public reads degrade to empty results when the store is unreachable so a
//! storage outage never takes the marketing pages down; the admin `create`
//! propagates failures because that action must be visibly acknowledged.

use std::sync::Arc;

use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::errors::{AppError, Result};
use crate::models::{NewTour, Tour};
use crate::services::store::TourStore;

pub const DEFAULT_FEATURED_LIMIT: i64 = 3;

#[derive(Clone)]
pub struct TourQueryService {
  store: Arc<dyn TourStore>,
}

impl TourQueryService {
  pub fn new(store: Arc<dyn TourStore>) -> Self {
    Self { store }
  }

  /// All published tours, newest first. Empty on store failure, never an error.
  #[instrument(name = "tours::list_published", skip(self))]
  pub async fn list_published(&self) -> Vec<Tour> {
    match self.store.list_published().await {
      Ok(tours) => tours,
      Err(e) => {
        warn!(error = %e, "Tour listing degraded to empty result");
        Vec::new()
      }
    }
  }

  /// Published tours flagged as featured, newest first.
  #[instrument(name = "tours::list_featured", skip(self))]
  pub async fn list_featured(&self, limit: Option<i64>) -> Vec<Tour> {
    let limit = limit.unwrap_or(DEFAULT_FEATURED_LIMIT).max(0);
    match self.store.list_featured(limit).await {
      Ok(tours) => tours,
      Err(e) => {
        warn!(error = %e, "Featured tour listing degraded to empty result");
        Vec::new()
      }
    }
  }

  /// Single published tour by id or slug. `None` is the normal "unknown key"
  /// outcome; a store failure also degrades to `None` (logged).
  #[instrument(name = "tours::get_by_id_or_slug", skip(self))]
  pub async fn get_by_id_or_slug(&self, key: &str) -> Option<Tour> {
    match self.store.get_by_id_or_slug(key).await {
      Ok(tour) => tour,
      Err(e) => {
        warn!(key, error = %e, "Tour lookup degraded to not-found");
        None
      }
    }
  }

  /// Best-effort view counter bump. The store's increment is atomic, so
  /// concurrent visits do not lose updates; a failure here is only logged.
  #[instrument(name = "tours::increment_views", skip(self))]
  pub async fn increment_views(&self, tour_id: Uuid) {
    if let Err(e) = self.store.increment_views(tour_id).await {
      warn!(%tour_id, error = %e, "View counter increment failed");
    }
  }

  /// Administrator-only tour creation. Validation mirrors the admin form's
  /// required fields; write failures (including slug collisions) propagate.
  #[instrument(name = "tours::create", skip(self, tour), fields(title = %tour.title))]
  pub async fn create(&self, tour: NewTour) -> Result<Tour> {
    validate(&tour)?;
    let slug = tour.slug.clone().unwrap_or_else(|| slugify(&tour.title));
    let created = self.store.insert(&tour, &slug).await?;
    info!(tour_id = %created.id, slug = %created.slug, "Tour created");
    Ok(created)
  }

  /// Destructive admin reseed: wipes the catalog and reinserts `tours` in a
  /// single transaction, so a mid-reseed failure leaves the old rows intact.
  #[instrument(name = "tours::reseed", skip(self, tours))]
  pub async fn reseed(&self, tours: &[NewTour]) -> Result<usize> {
    let inserted = self.store.replace_all(tours).await?;
    info!(inserted, "Tour catalog reseeded");
    Ok(inserted)
  }

  /// Startup seeding: populate the catalog with `tours` only when the table
  /// is empty. Returns whether anything was inserted.
  #[instrument(name = "tours::seed_if_empty", skip(self, tours))]
  pub async fn seed_if_empty(&self, tours: &[NewTour]) -> Result<bool> {
    if self.store.count().await? > 0 {
      return Ok(false);
    }
    self.store.replace_all(tours).await?;
    Ok(true)
  }
}

fn validate(tour: &NewTour) -> Result<()> {
  let required = [
    ("title", &tour.title),
    ("location", &tour.location),
    ("duration", &tour.duration),
    ("image_url", &tour.image_url),
  ];
  for (field, value) in required {
    if value.trim().is_empty() {
      return Err(AppError::Validation(format!("Field '{}' is required.", field)));
    }
  }
  if !tour.price.is_finite() || tour.price < 0.0 {
    return Err(AppError::Validation("Price must be a non-negative number.".to_string()));
  }
  Ok(())
}

/// URL-safe slug from a tour title: lowercase alphanumerics joined by single
/// hyphens ("7 Days Kenya Safari" -> "7-days-kenya-safari").
pub fn slugify(title: &str) -> String {
  let mut slug = String::with_capacity(title.len());
  let mut last_was_hyphen = true;
  for c in title.chars() {
    if c.is_ascii_alphanumeric() {
      slug.push(c.to_ascii_lowercase());
      last_was_hyphen = false;
    } else if !last_was_hyphen {
      slug.push('-');
      last_was_hyphen = true;
    }
  }
  while slug.ends_with('-') {
    slug.pop();
  }
  slug
}
