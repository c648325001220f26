//! Booking submission and customer booking lookup.
//!
//! Two call sites feed the same entity: the per-tour quick-booking form posts
//! camelCase fields, the rich trip-planning form posts snake_case ones. Both
//! arrive at one endpoint as an untagged union and are normalized into the
//! canonical `NewBooking` before any validation runs.

use actix_web::{web, HttpResponse};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::NewBooking;
use crate::state::AppState;

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TourBookingPayload {
  pub tour_id: String,
  pub full_name: String,
  pub email: String,
  pub phone: Option<String>,
  pub number_of_guests: i64,
  pub start_date: String,
  pub special_requests: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct GeneralInquiryPayload {
  pub first_name: String,
  pub last_name: String,
  pub email: String,
  pub phone: Option<String>,
  pub country: Option<String>,
  pub destination: Option<String>,
  pub departure_date: Option<String>,
  pub return_date: Option<String>,
  pub duration: Option<String>,
  pub travelers: i64,
  pub budget: Option<String>,
  #[serde(default)]
  pub services_needed: Vec<String>,
  pub special_interests: Option<String>,
  pub special_requirements: Option<String>,
  pub message: Option<String>,
}

#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub enum BookingRequest {
  Tour(TourBookingPayload),
  General(GeneralInquiryPayload),
}

fn parse_iso_date(field: &str, value: &str) -> Result<NaiveDate, AppError> {
  NaiveDate::parse_from_str(value, "%Y-%m-%d")
    .map_err(|_| AppError::Validation(format!("Field '{}' must be an ISO date (YYYY-MM-DD).", field)))
}

fn parse_opt_date(field: &str, value: Option<&str>) -> Result<Option<NaiveDate>, AppError> {
  match value {
    Some(v) if !v.trim().is_empty() => Ok(Some(parse_iso_date(field, v)?)),
    _ => Ok(None),
  }
}

impl BookingRequest {
  /// Collapse either wire shape into the canonical booking value. Syntactic
  /// checks (UUID, ISO dates) happen here; business validation is the
  /// intake service's job.
  pub fn normalize(self) -> Result<NewBooking, AppError> {
    match self {
      BookingRequest::Tour(p) => {
        let tour_id = Uuid::parse_str(&p.tour_id)
          .map_err(|_| AppError::Validation("Field 'tourId' must be a valid tour id.".to_string()))?;
        Ok(NewBooking {
          tour_id: Some(tour_id),
          full_name: p.full_name,
          email: p.email,
          phone: p.phone,
          country: None,
          destination: None,
          departure_date: Some(parse_iso_date("startDate", &p.start_date)?),
          return_date: None,
          duration: None,
          travelers: p.number_of_guests,
          budget: None,
          services_needed: vec![],
          special_interests: None,
          special_requirements: p.special_requests,
          message: None,
        })
      }
      BookingRequest::General(p) => Ok(NewBooking {
        tour_id: None,
        full_name: format!("{} {}", p.first_name.trim(), p.last_name.trim())
          .trim()
          .to_string(),
        email: p.email,
        phone: p.phone,
        country: p.country,
        destination: p.destination,
        departure_date: parse_opt_date("departure_date", p.departure_date.as_deref())?,
        return_date: parse_opt_date("return_date", p.return_date.as_deref())?,
        duration: p.duration,
        travelers: p.travelers,
        budget: p.budget,
        services_needed: p.services_needed,
        special_interests: p.special_interests,
        special_requirements: p.special_requirements,
        message: p.message,
      }),
    }
  }
}

#[instrument(name = "handler::submit_booking", skip(app_state, payload))]
pub async fn submit_booking_handler(
  app_state: web::Data<AppState>,
  payload: web::Json<BookingRequest>,
) -> Result<HttpResponse, AppError> {
  let booking = payload.into_inner().normalize()?;
  let booking_id = app_state.bookings.submit(booking).await?;

  info!(%booking_id, "Booking submitted");
  Ok(HttpResponse::Created().json(json!({
    "success": true,
    "message": "Booking submitted successfully",
    "bookingId": booking_id.to_string(),
  })))
}

#[derive(Deserialize, Debug)]
pub struct MyBookingsQuery {
  pub email: String,
}

#[instrument(name = "handler::my_bookings", skip(app_state, query), fields(email = %query.email))]
pub async fn my_bookings_handler(
  app_state: web::Data<AppState>,
  query: web::Query<MyBookingsQuery>,
) -> Result<HttpResponse, AppError> {
  let bookings = app_state.bookings.list_by_email(&query.email).await?;
  Ok(HttpResponse::Ok().json(json!({ "bookings": bookings })))
}
