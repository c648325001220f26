//! Shared fixtures for the endpoint tests: in-memory stores, a recording
//! mailer, and an `AppState` wired the way `main.rs` wires the real one.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use sqlx::types::Json;
use uuid::Uuid;

use safari_tours::config::AppConfig;
use safari_tours::errors::{AppError, Result};
use safari_tours::models::{
  Booking, BookingStatus, BookingUpdate, NewBooking, NewTour, PaymentStatus, Tour, TourStatus,
};
use safari_tours::services::bookings::BookingService;
use safari_tours::services::media::MediaStore;
use safari_tours::services::notify::{NotificationGateway, OutboundEmail};
use safari_tours::services::store::{BookingStore, TourStore};
use safari_tours::services::tours::{slugify, TourQueryService};
use safari_tours::state::AppState;

pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "safari-test-password";

#[derive(Default)]
pub struct MemTourStore {
  pub tours: Mutex<Vec<Tour>>,
  pub unreachable: bool,
}

impl MemTourStore {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn unreachable() -> Self {
    Self {
      tours: Mutex::new(Vec::new()),
      unreachable: true,
    }
  }

  fn check(&self) -> Result<()> {
    if self.unreachable {
      return Err(AppError::Database(sqlx::Error::PoolClosed));
    }
    Ok(())
  }

  fn materialize(tour: &NewTour, slug: &str) -> Tour {
    Tour {
      id: Uuid::new_v4(),
      slug: slug.to_string(),
      title: tour.title.clone(),
      location: tour.location.clone(),
      duration: tour.duration.clone(),
      price: tour.price,
      overview: tour.overview.clone(),
      highlights: tour.highlights.clone(),
      inclusions: tour.inclusions.clone(),
      exclusions: tour.exclusions.clone(),
      itinerary: Json(tour.itinerary.clone()),
      image_url: tour.image_url.clone(),
      gallery: tour.gallery.clone(),
      status: tour.status,
      featured: tour.featured,
      views: 0,
      created_at: Utc::now(),
    }
  }
}

#[async_trait]
impl TourStore for MemTourStore {
  async fn list_published(&self) -> Result<Vec<Tour>> {
    self.check()?;
    let tours = self.tours.lock().unwrap();
    Ok(
      tours
        .iter()
        .filter(|t| t.status == TourStatus::Published)
        .cloned()
        .collect(),
    )
  }

  async fn list_featured(&self, limit: i64) -> Result<Vec<Tour>> {
    self.check()?;
    let tours = self.tours.lock().unwrap();
    Ok(
      tours
        .iter()
        .filter(|t| t.status == TourStatus::Published && t.featured)
        .take(limit as usize)
        .cloned()
        .collect(),
    )
  }

  async fn get_by_id_or_slug(&self, key: &str) -> Result<Option<Tour>> {
    self.check()?;
    let tours = self.tours.lock().unwrap();
    Ok(
      tours
        .iter()
        .filter(|t| t.status == TourStatus::Published)
        .find(|t| t.slug == key || t.id.to_string() == key)
        .cloned(),
    )
  }

  async fn increment_views(&self, tour_id: Uuid) -> Result<()> {
    self.check()?;
    let mut tours = self.tours.lock().unwrap();
    if let Some(tour) = tours.iter_mut().find(|t| t.id == tour_id) {
      tour.views += 1;
    }
    Ok(())
  }

  async fn insert(&self, tour: &NewTour, slug: &str) -> Result<Tour> {
    self.check()?;
    let created = Self::materialize(tour, slug);
    self.tours.lock().unwrap().push(created.clone());
    Ok(created)
  }

  async fn count(&self) -> Result<i64> {
    self.check()?;
    Ok(self.tours.lock().unwrap().len() as i64)
  }

  async fn replace_all(&self, tours: &[NewTour]) -> Result<usize> {
    self.check()?;
    let mut rows = self.tours.lock().unwrap();
    rows.clear();
    for tour in tours {
      let slug = tour.slug.clone().unwrap_or_else(|| slugify(&tour.title));
      rows.push(Self::materialize(tour, &slug));
    }
    Ok(rows.len())
  }
}

#[derive(Default)]
pub struct MemBookingStore {
  pub bookings: Mutex<Vec<Booking>>,
}

impl MemBookingStore {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn row_count(&self) -> usize {
    self.bookings.lock().unwrap().len()
  }
}

#[async_trait]
impl BookingStore for MemBookingStore {
  async fn insert(&self, booking: &NewBooking) -> Result<Uuid> {
    let now = Utc::now();
    let row = Booking {
      id: Uuid::new_v4(),
      tour_id: booking.tour_id,
      full_name: booking.full_name.clone(),
      email: booking.email.clone(),
      phone: booking.phone.clone(),
      country: booking.country.clone(),
      destination: booking.destination.clone(),
      departure_date: booking.departure_date,
      return_date: booking.return_date,
      duration: booking.duration.clone(),
      travelers: booking.travelers as i32,
      budget: booking.budget.clone(),
      services_needed: booking.services_needed.clone(),
      special_interests: booking.special_interests.clone(),
      special_requirements: booking.special_requirements.clone(),
      message: booking.message.clone(),
      status: BookingStatus::Pending,
      payment_status: PaymentStatus::Unpaid,
      total_price: None,
      created_at: now,
      updated_at: now,
    };
    let id = row.id;
    self.bookings.lock().unwrap().push(row);
    Ok(id)
  }

  async fn list_by_email(&self, email: &str) -> Result<Vec<Booking>> {
    let bookings = self.bookings.lock().unwrap();
    Ok(bookings.iter().filter(|b| b.email == email).cloned().collect())
  }

  async fn list_all(&self) -> Result<Vec<Booking>> {
    Ok(self.bookings.lock().unwrap().clone())
  }

  async fn update(&self, id: Uuid, update: &BookingUpdate) -> Result<Option<Booking>> {
    let mut bookings = self.bookings.lock().unwrap();
    let Some(row) = bookings.iter_mut().find(|b| b.id == id) else {
      return Ok(None);
    };
    if let Some(status) = update.status {
      row.status = status;
    }
    if let Some(payment_status) = update.payment_status {
      row.payment_status = payment_status;
    }
    if let Some(total_price) = update.total_price {
      row.total_price = Some(total_price);
    }
    row.updated_at = Utc::now();
    Ok(Some(row.clone()))
  }
}

#[derive(Default)]
pub struct RecordingMailer {
  pub sent: Mutex<Vec<OutboundEmail>>,
}

#[async_trait]
impl NotificationGateway for RecordingMailer {
  async fn send(&self, email: &OutboundEmail) -> Result<()> {
    self.sent.lock().unwrap().push(email.clone());
    Ok(())
  }
}

fn test_config() -> AppConfig {
  AppConfig {
    server_host: "127.0.0.1".to_string(),
    server_port: 0,
    database_url: "postgres://unused".to_string(),
    email_api_url: "http://localhost/emails".to_string(),
    email_api_key: "test-key".to_string(),
    email_sender: "noreply@example.com".to_string(),
    operator_email: "ops@example.com".to_string(),
    admin_username: ADMIN_USERNAME.to_string(),
    admin_password_hash: safari_tours::services::auth::hash_password(ADMIN_PASSWORD)
      .expect("hashing the test admin password"),
    media_root: std::env::temp_dir()
      .join(format!("safari-test-media-{}", Uuid::new_v4()))
      .to_string_lossy()
      .into_owned(),
    media_public_url: "http://localhost:8080/media".to_string(),
    seed_db: false,
  }
}

pub fn test_state(tour_store: Arc<MemTourStore>, booking_store: Arc<MemBookingStore>) -> AppState {
  let config = Arc::new(test_config());
  let mailer = Arc::new(RecordingMailer::default());
  AppState {
    tours: TourQueryService::new(tour_store),
    bookings: BookingService::new(
      booking_store,
      mailer,
      config.email_sender.clone(),
      config.operator_email.clone(),
    ),
    media: MediaStore::new(config.media_root.clone(), config.media_public_url.clone()),
    config,
  }
}

pub fn published_tour(title: &str) -> NewTour {
  NewTour {
    slug: None,
    title: title.to_string(),
    location: "Masai Mara, Kenya".to_string(),
    duration: "3 Days / 2 Nights".to_string(),
    price: 850.0,
    overview: Some("Private safari with professional guide.".to_string()),
    highlights: vec!["Big Five Viewing".to_string()],
    inclusions: vec![],
    exclusions: vec![],
    itinerary: vec![],
    image_url: "https://example.com/hero.jpg".to_string(),
    gallery: vec![],
    status: TourStatus::Published,
    featured: false,
  }
}

pub fn basic_auth_header(username: &str, password: &str) -> String {
  use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
  format!("Basic {}", BASE64.encode(format!("{}:{}", username, password)))
}
