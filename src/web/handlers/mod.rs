pub mod admin_handlers;
pub mod booking_handlers;
pub mod tour_handlers;
