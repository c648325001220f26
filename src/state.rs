use crate::config::AppConfig;
use crate::services::bookings::BookingService;
use crate::services::media::MediaStore;
use crate::services::tours::TourQueryService;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
  pub tours: TourQueryService,
  pub bookings: BookingService,
  pub media: MediaStore,
  pub config: Arc<AppConfig>,
}
