//! Endpoint tests against the full actix app with in-memory stores.

mod common;

use std::sync::Arc;

use actix_web::{http::StatusCode, test, web, App};
use serde_json::{json, Value};

use common::{
  basic_auth_header, published_tour, test_state, MemBookingStore, MemTourStore, ADMIN_PASSWORD,
  ADMIN_USERNAME,
};
use safari_tours::models::TourStatus;
use safari_tours::services::store::TourStore;
use safari_tours::state::AppState;
use safari_tours::web::routes::configure_app_routes;

async fn spawn_app(
  state: AppState,
) -> impl actix_web::dev::Service<
  actix_http::Request,
  Response = actix_web::dev::ServiceResponse,
  Error = actix_web::Error,
> {
  test::init_service(
    App::new()
      .app_data(web::Data::new(state))
      .configure(configure_app_routes),
  )
  .await
}

#[actix_web::test]
async fn health_check_works() {
  let app = spawn_app(test_state(
    Arc::new(MemTourStore::new()),
    Arc::new(MemBookingStore::new()),
  ))
  .await;

  let resp = test::call_service(&app, test::TestRequest::get().uri("/api/v1/health").to_request()).await;
  assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn valid_booking_returns_201_with_booking_id() {
  let tours = Arc::new(MemTourStore::new());
  let bookings = Arc::new(MemBookingStore::new());
  let app = spawn_app(test_state(Arc::clone(&tours), Arc::clone(&bookings))).await;

  let tour = tours.insert(&published_tour("Masai Mara Safari"), "masai-mara-safari").await.unwrap();

  let req = test::TestRequest::post()
    .uri("/api/v1/bookings")
    .set_json(json!({
      "tourId": tour.id.to_string(),
      "fullName": "Jane Doe",
      "email": "jane@example.com",
      "numberOfGuests": 2,
      "startDate": "2025-06-01"
    }))
    .to_request();
  let resp = test::call_service(&app, req).await;

  assert_eq!(resp.status(), StatusCode::CREATED);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body["success"], json!(true));
  assert!(!body["bookingId"].as_str().unwrap().is_empty());
  assert_eq!(bookings.row_count(), 1);
}

#[actix_web::test]
async fn booking_without_email_is_rejected_and_nothing_is_inserted() {
  let bookings = Arc::new(MemBookingStore::new());
  let app = spawn_app(test_state(Arc::new(MemTourStore::new()), Arc::clone(&bookings))).await;

  // Email absent entirely: the payload matches neither wire shape.
  let req = test::TestRequest::post()
    .uri("/api/v1/bookings")
    .set_json(json!({
      "tourId": uuid::Uuid::new_v4().to_string(),
      "fullName": "Jane Doe",
      "numberOfGuests": 2,
      "startDate": "2025-06-01"
    }))
    .to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

  // Email present but empty: rejected by intake validation.
  let req = test::TestRequest::post()
    .uri("/api/v1/bookings")
    .set_json(json!({
      "tourId": uuid::Uuid::new_v4().to_string(),
      "fullName": "Jane Doe",
      "email": "",
      "numberOfGuests": 2,
      "startDate": "2025-06-01"
    }))
    .to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body["success"], json!(false));
  assert!(body["error"].as_str().is_some());

  assert_eq!(bookings.row_count(), 0);
}

#[actix_web::test]
async fn general_inquiry_shape_is_accepted_at_the_same_endpoint() {
  let bookings = Arc::new(MemBookingStore::new());
  let app = spawn_app(test_state(Arc::new(MemTourStore::new()), Arc::clone(&bookings))).await;

  let req = test::TestRequest::post()
    .uri("/api/v1/bookings")
    .set_json(json!({
      "first_name": "Jane",
      "last_name": "Doe",
      "email": "jane@example.com",
      "travelers": 4,
      "destination": "Maasai Mara",
      "services_needed": ["Accommodation"]
    }))
    .to_request();
  let resp = test::call_service(&app, req).await;

  assert_eq!(resp.status(), StatusCode::CREATED);
  assert_eq!(bookings.row_count(), 1);
  let stored = bookings.bookings.lock().unwrap()[0].clone();
  assert_eq!(stored.full_name, "Jane Doe");
  assert_eq!(stored.tour_id, None);
}

#[actix_web::test]
async fn my_bookings_filters_by_email() {
  let bookings = Arc::new(MemBookingStore::new());
  let app = spawn_app(test_state(Arc::new(MemTourStore::new()), Arc::clone(&bookings))).await;

  for email in ["jane@example.com", "jane@example.com", "bob@example.com"] {
    let req = test::TestRequest::post()
      .uri("/api/v1/bookings")
      .set_json(json!({
        "first_name": "Traveler",
        "last_name": "Person",
        "email": email,
        "travelers": 1
      }))
      .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);
  }

  let req = test::TestRequest::get()
    .uri("/api/v1/bookings?email=jane@example.com")
    .to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::OK);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body["bookings"].as_array().unwrap().len(), 2);
}

#[actix_web::test]
async fn tour_listing_shows_only_published_tours() {
  let tours = Arc::new(MemTourStore::new());
  let app = spawn_app(test_state(Arc::clone(&tours), Arc::new(MemBookingStore::new()))).await;

  tours.insert(&published_tour("Visible Safari"), "visible-safari").await.unwrap();
  let mut draft = published_tour("Hidden Safari");
  draft.status = TourStatus::Draft;
  tours.insert(&draft, "hidden-safari").await.unwrap();

  let resp = test::call_service(&app, test::TestRequest::get().uri("/api/v1/tours").to_request()).await;
  assert_eq!(resp.status(), StatusCode::OK);
  let body: Value = test::read_body_json(resp).await;
  let listed = body["tours"].as_array().unwrap();
  assert_eq!(listed.len(), 1);
  assert_eq!(listed[0]["slug"], json!("visible-safari"));
}

#[actix_web::test]
async fn tour_listing_degrades_to_empty_when_store_is_down() {
  let app = spawn_app(test_state(
    Arc::new(MemTourStore::unreachable()),
    Arc::new(MemBookingStore::new()),
  ))
  .await;

  let resp = test::call_service(&app, test::TestRequest::get().uri("/api/v1/tours").to_request()).await;
  assert_eq!(resp.status(), StatusCode::OK);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body["tours"].as_array().unwrap().len(), 0);
}

#[actix_web::test]
async fn unknown_tour_key_is_a_404() {
  let app = spawn_app(test_state(
    Arc::new(MemTourStore::new()),
    Arc::new(MemBookingStore::new()),
  ))
  .await;

  let req = test::TestRequest::get().uri("/api/v1/tours/does-not-exist").to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn tour_detail_works_by_slug_and_bumps_views() {
  let tours = Arc::new(MemTourStore::new());
  let app = spawn_app(test_state(Arc::clone(&tours), Arc::new(MemBookingStore::new()))).await;

  tours.insert(&published_tour("Detail Safari"), "detail-safari").await.unwrap();

  let req = test::TestRequest::get().uri("/api/v1/tours/detail-safari").to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::OK);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body["tour"]["slug"], json!("detail-safari"));

  // The increment is fire-and-forget; give the spawned task a moment.
  tokio::time::sleep(std::time::Duration::from_millis(50)).await;
  assert_eq!(tours.tours.lock().unwrap()[0].views, 1);
}

#[actix_web::test]
async fn featured_listing_respects_the_limit_parameter() {
  let tours = Arc::new(MemTourStore::new());
  let app = spawn_app(test_state(Arc::clone(&tours), Arc::new(MemBookingStore::new()))).await;

  for i in 0..5 {
    let mut tour = published_tour(&format!("Featured {}", i));
    tour.featured = true;
    tours.insert(&tour, &format!("featured-{}", i)).await.unwrap();
  }

  let resp = test::call_service(
    &app,
    test::TestRequest::get().uri("/api/v1/tours/featured?limit=2").to_request(),
  )
  .await;
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body["tours"].as_array().unwrap().len(), 2);

  // Default limit without the parameter.
  let resp = test::call_service(
    &app,
    test::TestRequest::get().uri("/api/v1/tours/featured").to_request(),
  )
  .await;
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body["tours"].as_array().unwrap().len(), 3);
}

#[actix_web::test]
async fn admin_endpoints_require_valid_basic_auth() {
  let app = spawn_app(test_state(
    Arc::new(MemTourStore::new()),
    Arc::new(MemBookingStore::new()),
  ))
  .await;

  let payload = json!({
    "title": "Admin Safari",
    "location": "Kenya",
    "duration": "3 Days",
    "price": 500.0,
    "image_url": "https://example.com/admin.jpg",
    "status": "published"
  });

  // No credentials.
  let req = test::TestRequest::post().uri("/api/v1/admin/tours").set_json(&payload).to_request();
  assert_eq!(test::call_service(&app, req).await.status(), StatusCode::UNAUTHORIZED);

  // Wrong password.
  let req = test::TestRequest::post()
    .uri("/api/v1/admin/tours")
    .insert_header(("Authorization", basic_auth_header(ADMIN_USERNAME, "wrong")))
    .set_json(&payload)
    .to_request();
  assert_eq!(test::call_service(&app, req).await.status(), StatusCode::UNAUTHORIZED);

  // Valid credentials.
  let req = test::TestRequest::post()
    .uri("/api/v1/admin/tours")
    .insert_header(("Authorization", basic_auth_header(ADMIN_USERNAME, ADMIN_PASSWORD)))
    .set_json(&payload)
    .to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::CREATED);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body["tour"]["slug"], json!("admin-safari"));
}

#[actix_web::test]
async fn admin_can_advance_a_booking_status() {
  let bookings = Arc::new(MemBookingStore::new());
  let app = spawn_app(test_state(Arc::new(MemTourStore::new()), Arc::clone(&bookings))).await;

  let req = test::TestRequest::post()
    .uri("/api/v1/bookings")
    .set_json(json!({
      "first_name": "Jane",
      "last_name": "Doe",
      "email": "jane@example.com",
      "travelers": 2
    }))
    .to_request();
  let resp = test::call_service(&app, req).await;
  let body: Value = test::read_body_json(resp).await;
  let booking_id = body["bookingId"].as_str().unwrap().to_string();

  let req = test::TestRequest::patch()
    .uri(&format!("/api/v1/admin/bookings/{}", booking_id))
    .insert_header(("Authorization", basic_auth_header(ADMIN_USERNAME, ADMIN_PASSWORD)))
    .set_json(json!({ "status": "confirmed", "total_price": 1700.0 }))
    .to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::OK);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body["booking"]["status"], json!("confirmed"));
  assert_eq!(body["booking"]["total_price"], json!(1700.0));
}

#[actix_web::test]
async fn admin_reseed_replaces_the_catalog() {
  let tours = Arc::new(MemTourStore::new());
  let app = spawn_app(test_state(Arc::clone(&tours), Arc::new(MemBookingStore::new()))).await;

  tours.insert(&published_tour("Old Safari"), "old-safari").await.unwrap();

  let req = test::TestRequest::post()
    .uri("/api/v1/admin/seed")
    .insert_header(("Authorization", basic_auth_header(ADMIN_USERNAME, ADMIN_PASSWORD)))
    .to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::OK);

  let listed = tours.list_published().await.unwrap();
  assert!(!listed.is_empty());
  assert!(listed.iter().all(|t| t.slug != "old-safari"));
}
