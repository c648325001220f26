//! Storage traits for the two primary tables, plus their Postgres
//! implementations. Handlers and services only ever see the traits, so tests
//! can swap in in-memory fakes without a database.

use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::errors::Result;
use crate::models::{Booking, BookingUpdate, NewBooking, NewTour, Tour};

const TOUR_COLUMNS: &str = "id, slug, title, location, duration, price, overview, highlights, \
   inclusions, exclusions, itinerary, image_url, gallery, status, featured, views, created_at";

const BOOKING_COLUMNS: &str = "id, tour_id, full_name, email, phone, country, destination, \
   departure_date, return_date, duration, travelers, budget, services_needed, special_interests, \
   special_requirements, message, status, payment_status, total_price, created_at, updated_at";

#[async_trait]
pub trait TourStore: Send + Sync {
  /// All published tours, newest first.
  async fn list_published(&self) -> Result<Vec<Tour>>;

  /// Published tours flagged as featured, newest first, at most `limit`.
  async fn list_featured(&self, limit: i64) -> Result<Vec<Tour>>;

  /// Single published tour by id (when `key` parses as a UUID) or slug.
  async fn get_by_id_or_slug(&self, key: &str) -> Result<Option<Tour>>;

  /// Atomic `views = views + 1`. Concurrent callers do not lose updates.
  async fn increment_views(&self, tour_id: Uuid) -> Result<()>;

  async fn insert(&self, tour: &NewTour, slug: &str) -> Result<Tour>;

  async fn count(&self) -> Result<i64>;

  /// Wipe the table and reinsert `tours`, all inside one transaction, so a
  /// failed reseed cannot leave the catalog empty. Returns the row count.
  async fn replace_all(&self, tours: &[NewTour]) -> Result<usize>;
}

#[async_trait]
pub trait BookingStore: Send + Sync {
  /// Insert with `status = pending`; the database generates the id and
  /// timestamps and the generated id is returned.
  async fn insert(&self, booking: &NewBooking) -> Result<Uuid>;

  /// A customer's own bookings, newest first. Email is the correlation key.
  async fn list_by_email(&self, email: &str) -> Result<Vec<Booking>>;

  async fn list_all(&self) -> Result<Vec<Booking>>;

  /// Administrative field update; `None` when no such booking exists.
  async fn update(&self, id: Uuid, update: &BookingUpdate) -> Result<Option<Booking>>;
}

// --- Postgres implementations ---

#[derive(Clone)]
pub struct PgTourStore {
  pool: PgPool,
}

impl PgTourStore {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

async fn insert_tour_tx<'e, E>(executor: E, tour: &NewTour, slug: &str) -> Result<Tour>
where
  E: sqlx::PgExecutor<'e>,
{
  let sql = format!(
    "INSERT INTO tours (slug, title, location, duration, price, overview, highlights, \
     inclusions, exclusions, itinerary, image_url, gallery, status, featured) \
     VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14) \
     RETURNING {}",
    TOUR_COLUMNS
  );
  let inserted: Tour = sqlx::query_as(&sql)
    .bind(slug)
    .bind(&tour.title)
    .bind(&tour.location)
    .bind(&tour.duration)
    .bind(tour.price)
    .bind(&tour.overview)
    .bind(&tour.highlights)
    .bind(&tour.inclusions)
    .bind(&tour.exclusions)
    .bind(Json(&tour.itinerary))
    .bind(&tour.image_url)
    .bind(&tour.gallery)
    .bind(tour.status)
    .bind(tour.featured)
    .fetch_one(executor)
    .await?;
  Ok(inserted)
}

#[async_trait]
impl TourStore for PgTourStore {
  async fn list_published(&self) -> Result<Vec<Tour>> {
    let sql = format!(
      "SELECT {} FROM tours WHERE status = 'published' ORDER BY created_at DESC",
      TOUR_COLUMNS
    );
    let tours = sqlx::query_as(&sql).fetch_all(&self.pool).await?;
    Ok(tours)
  }

  async fn list_featured(&self, limit: i64) -> Result<Vec<Tour>> {
    let sql = format!(
      "SELECT {} FROM tours WHERE status = 'published' AND featured = TRUE \
       ORDER BY created_at DESC LIMIT $1",
      TOUR_COLUMNS
    );
    let tours = sqlx::query_as(&sql).bind(limit).fetch_all(&self.pool).await?;
    Ok(tours)
  }

  async fn get_by_id_or_slug(&self, key: &str) -> Result<Option<Tour>> {
    // Public lookup accepts either identity; only published tours are visible.
    let tour = if let Ok(id) = Uuid::parse_str(key) {
      let sql = format!(
        "SELECT {} FROM tours WHERE id = $1 AND status = 'published'",
        TOUR_COLUMNS
      );
      sqlx::query_as(&sql).bind(id).fetch_optional(&self.pool).await?
    } else {
      let sql = format!(
        "SELECT {} FROM tours WHERE slug = $1 AND status = 'published'",
        TOUR_COLUMNS
      );
      sqlx::query_as(&sql).bind(key).fetch_optional(&self.pool).await?
    };
    Ok(tour)
  }

  async fn increment_views(&self, tour_id: Uuid) -> Result<()> {
    sqlx::query("UPDATE tours SET views = views + 1 WHERE id = $1")
      .bind(tour_id)
      .execute(&self.pool)
      .await?;
    Ok(())
  }

  async fn insert(&self, tour: &NewTour, slug: &str) -> Result<Tour> {
    insert_tour_tx(&self.pool, tour, slug).await
  }

  async fn count(&self) -> Result<i64> {
    let row = sqlx::query("SELECT COUNT(*) AS n FROM tours")
      .fetch_one(&self.pool)
      .await?;
    Ok(row.get::<i64, _>("n"))
  }

  async fn replace_all(&self, tours: &[NewTour]) -> Result<usize> {
    let mut tx = self.pool.begin().await?;
    sqlx::query("DELETE FROM tours").execute(&mut *tx).await?;
    for tour in tours {
      let slug = tour
        .slug
        .clone()
        .unwrap_or_else(|| crate::services::tours::slugify(&tour.title));
      insert_tour_tx(&mut *tx, tour, &slug).await?;
    }
    tx.commit().await?;
    Ok(tours.len())
  }
}

#[derive(Clone)]
pub struct PgBookingStore {
  pool: PgPool,
}

impl PgBookingStore {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

#[async_trait]
impl BookingStore for PgBookingStore {
  async fn insert(&self, booking: &NewBooking) -> Result<Uuid> {
    let row = sqlx::query(
      "INSERT INTO bookings (tour_id, full_name, email, phone, country, destination, \
       departure_date, return_date, duration, travelers, budget, services_needed, \
       special_interests, special_requirements, message, status) \
       VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, 'pending') \
       RETURNING id",
    )
    .bind(booking.tour_id)
    .bind(&booking.full_name)
    .bind(&booking.email)
    .bind(&booking.phone)
    .bind(&booking.country)
    .bind(&booking.destination)
    .bind(booking.departure_date)
    .bind(booking.return_date)
    .bind(&booking.duration)
    .bind(booking.travelers as i32)
    .bind(&booking.budget)
    .bind(&booking.services_needed)
    .bind(&booking.special_interests)
    .bind(&booking.special_requirements)
    .bind(&booking.message)
    .fetch_one(&self.pool)
    .await?;
    Ok(row.get::<Uuid, _>("id"))
  }

  async fn list_by_email(&self, email: &str) -> Result<Vec<Booking>> {
    let sql = format!(
      "SELECT {} FROM bookings WHERE email = $1 ORDER BY created_at DESC",
      BOOKING_COLUMNS
    );
    let bookings = sqlx::query_as(&sql).bind(email).fetch_all(&self.pool).await?;
    Ok(bookings)
  }

  async fn list_all(&self) -> Result<Vec<Booking>> {
    let sql = format!("SELECT {} FROM bookings ORDER BY created_at DESC", BOOKING_COLUMNS);
    let bookings = sqlx::query_as(&sql).fetch_all(&self.pool).await?;
    Ok(bookings)
  }

  async fn update(&self, id: Uuid, update: &BookingUpdate) -> Result<Option<Booking>> {
    let sql = format!(
      "UPDATE bookings SET \
       status = COALESCE($2, status), \
       payment_status = COALESCE($3, payment_status), \
       total_price = COALESCE($4, total_price), \
       updated_at = NOW() \
       WHERE id = $1 RETURNING {}",
      BOOKING_COLUMNS
    );
    let booking = sqlx::query_as(&sql)
      .bind(id)
      .bind(update.status)
      .bind(update.payment_status)
      .bind(update.total_price)
      .fetch_optional(&self.pool)
      .await?;
    Ok(booking)
  }
}
