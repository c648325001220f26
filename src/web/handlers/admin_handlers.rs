//! Administrator endpoints: tour creation, booking management, media upload
//! and the catalog reseed. Every handler takes the `AdminUser` extractor, so
//! requests without valid Basic credentials never reach the body.

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::db::default_tours;
use crate::errors::AppError;
use crate::models::{BookingUpdate, NewTour};
use crate::state::AppState;
use crate::web::extractors::AdminUser;

#[instrument(name = "handler::create_tour", skip(app_state, payload), fields(admin = %admin.username))]
pub async fn create_tour_handler(
  admin: AdminUser,
  app_state: web::Data<AppState>,
  payload: web::Json<NewTour>,
) -> Result<HttpResponse, AppError> {
  let tour = app_state.tours.create(payload.into_inner()).await?;
  Ok(HttpResponse::Created().json(json!({ "tour": tour })))
}

#[instrument(name = "handler::admin_list_bookings", skip(app_state), fields(admin = %admin.username))]
pub async fn list_bookings_handler(
  admin: AdminUser,
  app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
  let bookings = app_state.bookings.list_all().await?;
  Ok(HttpResponse::Ok().json(json!({ "bookings": bookings })))
}

#[instrument(
  name = "handler::admin_update_booking",
  skip(app_state, payload),
  fields(admin = %admin.username, booking_id = %path.as_ref())
)]
pub async fn update_booking_handler(
  admin: AdminUser,
  app_state: web::Data<AppState>,
  path: web::Path<Uuid>,
  payload: web::Json<BookingUpdate>,
) -> Result<HttpResponse, AppError> {
  let booking = app_state.bookings.update(path.into_inner(), payload.into_inner()).await?;
  info!(booking_id = %booking.id, status = ?booking.status, "Booking updated");
  Ok(HttpResponse::Ok().json(json!({ "booking": booking })))
}

#[derive(Deserialize, Debug)]
pub struct UploadQuery {
  /// Original filename, used only for its extension.
  pub name: Option<String>,
}

#[instrument(name = "handler::upload_media", skip(app_state, body, query), fields(admin = %admin.username))]
pub async fn upload_media_handler(
  admin: AdminUser,
  app_state: web::Data<AppState>,
  query: web::Query<UploadQuery>,
  body: web::Bytes,
) -> Result<HttpResponse, AppError> {
  let name = query.name.as_deref().unwrap_or("upload.bin");
  let stored = app_state.media.store(name, &body).await?;
  Ok(HttpResponse::Created().json(json!({
    "success": true,
    "filePath": stored.file_name,
    "publicUrl": stored.public_url,
  })))
}

#[instrument(name = "handler::reseed", skip(app_state), fields(admin = %admin.username))]
pub async fn reseed_handler(
  admin: AdminUser,
  app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
  warn!("Admin requested a catalog reseed; replacing all tours");
  let inserted = app_state.tours.reseed(&default_tours()).await?;
  Ok(HttpResponse::Ok().json(json!({ "success": true, "tours": inserted })))
}
