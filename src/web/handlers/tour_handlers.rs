//! Public tour catalog endpoints.

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::state::AppState;

#[instrument(name = "handler::list_tours", skip(app_state))]
pub async fn list_tours_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  // Degrades to an empty list on storage failure so the catalog page keeps
  // rendering; the service logs the cause.
  let tours = app_state.tours.list_published().await;
  info!("Listing {} published tours", tours.len());
  Ok(HttpResponse::Ok().json(json!({ "tours": tours })))
}

#[derive(Deserialize, Debug)]
pub struct FeaturedQuery {
  pub limit: Option<i64>,
}

#[instrument(name = "handler::featured_tours", skip(app_state, query))]
pub async fn featured_tours_handler(
  app_state: web::Data<AppState>,
  query: web::Query<FeaturedQuery>,
) -> Result<HttpResponse, AppError> {
  let tours = app_state.tours.list_featured(query.limit).await;
  Ok(HttpResponse::Ok().json(json!({ "tours": tours })))
}

#[instrument(name = "handler::get_tour", skip(app_state, path), fields(key = %path.as_ref()))]
pub async fn get_tour_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let key = path.into_inner();

  match app_state.tours.get_by_id_or_slug(&key).await {
    Some(tour) => {
      // A detail fetch is a page visit: bump the view counter without
      // holding up the response.
      let tours = app_state.tours.clone();
      let tour_id = tour.id;
      tokio::spawn(async move { tours.increment_views(tour_id).await });

      Ok(HttpResponse::Ok().json(json!({ "tour": tour })))
    }
    None => Err(AppError::NotFound(format!("Tour '{}' not found.", key))),
  }
}
