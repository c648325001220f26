//! Outbound transactional email.
//!
//! Every accepted booking produces two independent sends: a customer-facing
//! confirmation and an operator-facing alert. Both are best-effort — a failed
//! send is logged and never rolls back or fails the booking.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::instrument;
use uuid::Uuid;

use crate::errors::{AppError, Result};
use crate::models::NewBooking;

#[derive(Debug, Clone, Serialize)]
pub struct OutboundEmail {
  pub from: String,
  pub to: String,
  pub subject: String,
  pub html: String,
}

#[async_trait]
pub trait NotificationGateway: Send + Sync {
  async fn send(&self, email: &OutboundEmail) -> Result<()>;
}

/// HTTP client for a Resend-compatible transactional email API.
#[derive(Debug, Clone)]
pub struct HttpMailer {
  api_url: String,
  api_key: String,
  http: Client,
}

impl HttpMailer {
  pub fn new(api_url: String, api_key: String) -> Self {
    Self {
      api_url,
      api_key,
      http: Client::new(),
    }
  }
}

#[async_trait]
impl NotificationGateway for HttpMailer {
  #[instrument(name = "notify::send", skip(self, email), fields(to = %email.to, subject = %email.subject))]
  async fn send(&self, email: &OutboundEmail) -> Result<()> {
    let response = self
      .http
      .post(&self.api_url)
      .bearer_auth(&self.api_key)
      .json(email)
      .send()
      .await
      .map_err(|e| AppError::Email(format!("email request failed: {}", e)))?;

    if !response.status().is_success() {
      let status = response.status();
      let text = response.text().await.unwrap_or_default();
      return Err(AppError::Email(format!(
        "email provider returned status {}: {}",
        status, text
      )));
    }

    Ok(())
  }
}

/// Confirmation sent to the customer, embedding the generated booking id.
pub fn customer_confirmation(sender: &str, booking: &NewBooking, booking_id: Uuid) -> OutboundEmail {
  let date = booking
    .departure_date
    .map(|d| d.to_string())
    .unwrap_or_else(|| "To be discussed".to_string());
  let html = format!(
    "<div style=\"font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;\">\
       <h2>Booking Confirmation</h2>\
       <p>Dear {name},</p>\
       <p>Thank you for booking with us! We're excited to help you plan your \
       unforgettable safari adventure.</p>\
       <div style=\"background-color: #f5f5f5; padding: 20px; border-radius: 8px;\">\
         <h3>Booking Details</h3>\
         <p><strong>Booking Reference:</strong> {id}</p>\
         <p><strong>Number of Guests:</strong> {guests}</p>\
         <p><strong>Preferred Start Date:</strong> {date}</p>\
         <p><strong>Status:</strong> Pending Confirmation</p>\
       </div>\
       <p>Our team will review your booking and contact you within 24 hours to \
       confirm availability and discuss payment options.</p>\
     </div>",
    name = booking.full_name,
    id = booking_id,
    guests = booking.travelers,
    date = date,
  );
  OutboundEmail {
    from: sender.to_string(),
    to: booking.email.clone(),
    subject: "Booking Confirmation - Safari Experience".to_string(),
    html,
  }
}

/// Alert sent to the operator inbox with the raw contact details.
pub fn operator_alert(sender: &str, operator: &str, booking: &NewBooking, booking_id: Uuid) -> OutboundEmail {
  let date = booking
    .departure_date
    .map(|d| d.to_string())
    .unwrap_or_else(|| "Not provided".to_string());
  let tour = booking
    .tour_id
    .map(|id| id.to_string())
    .unwrap_or_else(|| "General inquiry".to_string());
  let html = format!(
    "<div style=\"font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;\">\
       <h2>New Booking Request</h2>\
       <div style=\"background-color: #f5f5f5; padding: 20px; border-radius: 8px;\">\
         <h3>Customer Information</h3>\
         <p><strong>Name:</strong> {name}</p>\
         <p><strong>Email:</strong> {email}</p>\
         <p><strong>Phone:</strong> {phone}</p>\
         <p><strong>Booking Reference:</strong> {id}</p>\
       </div>\
       <div style=\"background-color: #f5f5f5; padding: 20px; border-radius: 8px;\">\
         <h3>Trip Details</h3>\
         <p><strong>Tour:</strong> {tour}</p>\
         <p><strong>Number of Guests:</strong> {guests}</p>\
         <p><strong>Preferred Start Date:</strong> {date}</p>\
         <p><strong>Special Requests:</strong> {requests}</p>\
       </div>\
       <p>Please review this booking and contact the customer to confirm \
       availability and discuss payment.</p>\
     </div>",
    name = booking.full_name,
    email = booking.email,
    phone = booking.phone.as_deref().unwrap_or("Not provided"),
    id = booking_id,
    tour = tour,
    guests = booking.travelers,
    date = date,
    requests = booking.special_requirements.as_deref().unwrap_or("None"),
  );
  OutboundEmail {
    from: sender.to_string(),
    to: operator.to_string(),
    subject: format!("New Booking Request - {}", booking.full_name),
    html,
  }
}
