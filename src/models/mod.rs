//! Contains data structures representing database entities.

pub mod booking;
pub mod tour;

pub use booking::{Booking, BookingStatus, BookingUpdate, NewBooking, PaymentStatus};
pub use tour::{ItineraryDay, NewTour, Tour, TourStatus};
