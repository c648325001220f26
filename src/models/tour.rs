use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::{FromRow, Type as SqlxType};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, SqlxType)]
#[sqlx(type_name = "tour_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TourStatus {
  Draft,
  Published,
}

/// One labeled entry of a tour itinerary, e.g. `{"label": "Day 1", "detail": "..."}`.
///
/// Stored as a JSONB array rather than an object keyed by day label: the
/// array position is the display order, which jsonb objects would not keep.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItineraryDay {
  pub label: String,
  pub detail: String,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Tour {
  pub id: Uuid,
  pub slug: String,
  pub title: String,
  pub location: String,
  /// Free text, e.g. "7 Days / 6 Nights".
  pub duration: String,
  /// USD.
  pub price: f64,
  pub overview: Option<String>,
  pub highlights: Vec<String>,
  pub inclusions: Vec<String>,
  pub exclusions: Vec<String>,
  pub itinerary: Json<Vec<ItineraryDay>>,
  /// Primary hero image.
  pub image_url: String,
  pub gallery: Vec<String>,
  pub status: TourStatus,
  pub featured: bool,
  pub views: i32,
  pub created_at: DateTime<Utc>,
}

/// Fields an administrator supplies when creating a tour. The store is
/// authoritative for `id`, `views` and `created_at`.
#[derive(Debug, Clone, Deserialize)]
pub struct NewTour {
  pub slug: Option<String>,
  pub title: String,
  pub location: String,
  pub duration: String,
  pub price: f64,
  pub overview: Option<String>,
  #[serde(default)]
  pub highlights: Vec<String>,
  #[serde(default)]
  pub inclusions: Vec<String>,
  #[serde(default)]
  pub exclusions: Vec<String>,
  #[serde(default)]
  pub itinerary: Vec<ItineraryDay>,
  pub image_url: String,
  #[serde(default)]
  pub gallery: Vec<String>,
  /// Draft vs published is the caller's decision, not enforced here.
  pub status: TourStatus,
  #[serde(default)]
  pub featured: bool,
}
