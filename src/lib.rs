//! Tour catalog and booking intake backend for a safari tour operator.
//!
//! The interesting logic is two small services: booking intake (validate,
//! persist as `pending`, fire off two notification emails that never block
//! the response) and tour catalog queries (public reads that degrade to
//! empty results during a storage outage, plus the admin write path).
//! Everything else is actix-web plumbing around them.

pub mod config;
pub mod db;
pub mod errors;
pub mod models;
pub mod services;
pub mod state;
pub mod web;
