use actix_web::web;

async fn health_check_handler() -> actix_web::HttpResponse {
  actix_web::HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

// Called from `main.rs` (and the endpoint tests) to configure the Actix App.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg.service(
    web::scope("/api/v1")
      .route("/health", web::get().to(health_check_handler))
      // Public catalog. `/featured` is registered before `/{key}` so the
      // literal segment wins the match.
      .service(
        web::scope("/tours")
          .route(
            "",
            web::get().to(crate::web::handlers::tour_handlers::list_tours_handler),
          )
          .route(
            "/featured",
            web::get().to(crate::web::handlers::tour_handlers::featured_tours_handler),
          )
          .route(
            "/{key}",
            web::get().to(crate::web::handlers::tour_handlers::get_tour_handler),
          ),
      )
      // Booking intake plus the "my bookings" lookup keyed by email.
      .service(
        web::scope("/bookings")
          .route(
            "",
            web::post().to(crate::web::handlers::booking_handlers::submit_booking_handler),
          )
          .route(
            "",
            web::get().to(crate::web::handlers::booking_handlers::my_bookings_handler),
          ),
      )
      // Admin surfaces, all behind the AdminUser basic-auth extractor.
      .service(
        web::scope("/admin")
          .route(
            "/tours",
            web::post().to(crate::web::handlers::admin_handlers::create_tour_handler),
          )
          .route(
            "/bookings",
            web::get().to(crate::web::handlers::admin_handlers::list_bookings_handler),
          )
          .route(
            "/bookings/{id}",
            web::patch().to(crate::web::handlers::admin_handlers::update_booking_handler),
          )
          .route(
            "/media",
            web::post().to(crate::web::handlers::admin_handlers::upload_media_handler),
          )
          .route(
            "/seed",
            web::post().to(crate::web::handlers::admin_handlers::reseed_handler),
          ),
      ),
  );
}
