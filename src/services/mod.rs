pub mod auth;
pub mod bookings;
pub mod media;
pub mod notify;
pub mod store;
pub mod tours;
