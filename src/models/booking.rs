use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type as SqlxType};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, SqlxType)]
#[sqlx(type_name = "booking_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
  Pending,
  Confirmed,
  Cancelled,
  Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, SqlxType)]
#[sqlx(type_name = "payment_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
  Unpaid,
  Partial,
  Paid,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Booking {
  pub id: Uuid,
  /// Null for a general trip-planning inquiry not tied to a tour.
  pub tour_id: Option<Uuid>,
  pub full_name: String,
  pub email: String,
  pub phone: Option<String>,
  pub country: Option<String>,
  pub destination: Option<String>,
  pub departure_date: Option<NaiveDate>,
  pub return_date: Option<NaiveDate>,
  pub duration: Option<String>,
  pub travelers: i32,
  pub budget: Option<String>,
  pub services_needed: Vec<String>,
  pub special_interests: Option<String>,
  pub special_requirements: Option<String>,
  pub message: Option<String>,
  pub status: BookingStatus,
  pub payment_status: PaymentStatus,
  /// Set by the administrator once a price is agreed; never by the customer.
  pub total_price: Option<f64>,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

/// Canonical write shape both wire payloads normalize into before any
/// validation or persistence happens.
#[derive(Debug, Clone)]
pub struct NewBooking {
  pub tour_id: Option<Uuid>,
  pub full_name: String,
  pub email: String,
  pub phone: Option<String>,
  pub country: Option<String>,
  pub destination: Option<String>,
  pub departure_date: Option<NaiveDate>,
  pub return_date: Option<NaiveDate>,
  pub duration: Option<String>,
  pub travelers: i64,
  pub budget: Option<String>,
  pub services_needed: Vec<String>,
  pub special_interests: Option<String>,
  pub special_requirements: Option<String>,
  pub message: Option<String>,
}

/// Administrative field updates; everything is optional so a PATCH can touch
/// any subset. Customers never reach this type.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookingUpdate {
  pub status: Option<BookingStatus>,
  pub payment_status: Option<PaymentStatus>,
  pub total_price: Option<f64>,
}
