use std::sync::Arc;

use actix_web::{web as actix_data, App, HttpServer};
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;

use safari_tours::config::AppConfig;
use safari_tours::db;
use safari_tours::services::bookings::BookingService;
use safari_tours::services::media::MediaStore;
use safari_tours::services::notify::HttpMailer;
use safari_tours::services::store::{PgBookingStore, PgTourStore};
use safari_tours::services::tours::TourQueryService;
use safari_tours::state::AppState;
use safari_tours::web::routes::configure_app_routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  tracing_subscriber::fmt()
    .with_max_level(Level::INFO)
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
    .with_span_events(FmtSpan::CLOSE)
    .init();

  tracing::info!("Starting safari tours server...");

  let app_config = match AppConfig::from_env() {
    Ok(cfg) => Arc::new(cfg),
    Err(e) => {
      tracing::error!(error = %e, "Failed to load application configuration.");
      panic!("Configuration error: {}", e);
    }
  };

  let db_pool = match db::connect(&app_config.database_url).await {
    Ok(pool) => {
      tracing::info!("Successfully connected to the database.");
      pool
    }
    Err(e) => {
      tracing::error!(error = %e, "Failed to connect to the database.");
      panic!("Database connection error: {}", e);
    }
  };

  tracing::info!("Running migrations...");
  if let Err(e) = sqlx::migrate!("./migrations").run(&db_pool).await {
    tracing::error!(error = %e, "Failed to run migrations.");
    panic!("Migration error: {}", e);
  }

  let tour_store = Arc::new(PgTourStore::new(db_pool.clone()));
  let booking_store = Arc::new(PgBookingStore::new(db_pool.clone()));
  let mailer = Arc::new(HttpMailer::new(
    app_config.email_api_url.clone(),
    app_config.email_api_key.clone(),
  ));

  let tours = TourQueryService::new(tour_store);
  let bookings = BookingService::new(
    booking_store,
    mailer,
    app_config.email_sender.clone(),
    app_config.operator_email.clone(),
  );
  let media = MediaStore::new(app_config.media_root.clone(), app_config.media_public_url.clone());

  if app_config.seed_db {
    match tours.seed_if_empty(&db::default_tours()).await {
      Ok(true) => tracing::info!("Seeded the tour catalog with the default lineup."),
      Ok(false) => tracing::info!("Tour catalog already populated; seed skipped."),
      Err(e) => tracing::error!(error = %e, "Failed to seed the tour catalog."),
    }
  }

  let app_state = AppState {
    tours,
    bookings,
    media,
    config: app_config.clone(),
  };

  let server_address = format!("{}:{}", app_config.server_host, app_config.server_port);
  tracing::info!("Attempting to bind server to {}...", server_address);

  HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone()))
      .wrap(tracing_actix_web::TracingLogger::default())
      .configure(configure_app_routes)
  })
  .bind(&server_address)?
  .run()
  .await
}
