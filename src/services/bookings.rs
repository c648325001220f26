//! Booking intake: validate an inquiry, persist it as `pending`, then fire
//! off the two notification emails without blocking the caller's response.

use std::sync::Arc;

use futures_util::future::join;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::errors::{AppError, Result};
use crate::models::{Booking, BookingUpdate, NewBooking};
use crate::services::notify::{customer_confirmation, operator_alert, NotificationGateway};
use crate::services::store::BookingStore;

pub const MAX_TRAVELERS: i64 = 20;

#[derive(Clone)]
pub struct BookingService {
  store: Arc<dyn BookingStore>,
  mailer: Arc<dyn NotificationGateway>,
  sender: String,
  operator_email: String,
}

impl BookingService {
  pub fn new(
    store: Arc<dyn BookingStore>,
    mailer: Arc<dyn NotificationGateway>,
    sender: String,
    operator_email: String,
  ) -> Self {
    Self {
      store,
      mailer,
      sender,
      operator_email,
    }
  }

  /// Validate and persist one inquiry. The returned id comes from the store.
  ///
  /// The customer-visible result is decided entirely by the insert: the two
  /// notification sends run in a detached task after the commit point and a
  /// failure there is logged, never surfaced.
  #[instrument(name = "bookings::submit", skip(self, booking), fields(email = %booking.email))]
  pub async fn submit(&self, booking: NewBooking) -> Result<Uuid> {
    validate(&booking)?;

    let booking_id = self.store.insert(&booking).await.map_err(|e| {
      warn!(error = %e, "Failed to persist booking");
      e
    })?;
    info!(%booking_id, "Booking persisted with pending status");

    let mailer = Arc::clone(&self.mailer);
    let confirmation = customer_confirmation(&self.sender, &booking, booking_id);
    let alert = operator_alert(&self.sender, &self.operator_email, &booking, booking_id);
    tokio::spawn(async move {
      let (customer_sent, operator_sent) = join(mailer.send(&confirmation), mailer.send(&alert)).await;
      if let Err(e) = customer_sent {
        warn!(%booking_id, error = %e, "Customer confirmation email failed");
      }
      if let Err(e) = operator_sent {
        warn!(%booking_id, error = %e, "Operator notification email failed");
      }
    });

    Ok(booking_id)
  }

  /// A customer's own bookings, looked up by the email they submitted with.
  #[instrument(name = "bookings::list_by_email", skip(self))]
  pub async fn list_by_email(&self, email: &str) -> Result<Vec<Booking>> {
    if email.trim().is_empty() {
      return Err(AppError::Validation("An email address is required.".to_string()));
    }
    self.store.list_by_email(email).await
  }

  #[instrument(name = "bookings::list_all", skip(self))]
  pub async fn list_all(&self) -> Result<Vec<Booking>> {
    self.store.list_all().await
  }

  /// Administrator-only status / payment / price update.
  #[instrument(name = "bookings::update", skip(self, update))]
  pub async fn update(&self, id: Uuid, update: BookingUpdate) -> Result<Booking> {
    self
      .store
      .update(id, &update)
      .await?
      .ok_or_else(|| AppError::NotFound(format!("Booking {} not found.", id)))
  }
}

fn validate(booking: &NewBooking) -> Result<()> {
  if booking.full_name.trim().is_empty() {
    return Err(AppError::Validation("A name is required.".to_string()));
  }
  if !is_well_formed_email(&booking.email) {
    return Err(AppError::Validation("A valid email address is required.".to_string()));
  }
  if booking.travelers < 1 || booking.travelers > MAX_TRAVELERS {
    return Err(AppError::Validation(format!(
      "Number of travelers must be between 1 and {}.",
      MAX_TRAVELERS
    )));
  }
  // A tour-specific booking needs a requested date; a general inquiry does
  // not. Nothing checks that the date is in the future or that the return
  // date follows it — pending bookings are reviewed by a human.
  if booking.tour_id.is_some() && booking.departure_date.is_none() {
    return Err(AppError::Validation(
      "A start date is required when booking a specific tour.".to_string(),
    ));
  }
  Ok(())
}

/// Syntactic check only: one `@` with something on both sides, no whitespace.
/// Deliverability is the email provider's problem.
fn is_well_formed_email(email: &str) -> bool {
  if email.contains(char::is_whitespace) {
    return false;
  }
  let mut parts = email.splitn(2, '@');
  match (parts.next(), parts.next()) {
    (Some(local), Some(domain)) => !local.is_empty() && domain.contains('.') && !domain.starts_with('.'),
    _ => false,
  }
}
