//! Ride lifecycle - the state machine from request to completion.

pub mod actions;
pub mod errors;
pub mod events;
pub mod models;
pub mod otp;
pub mod repository;

pub use errors::RideError;
pub use repository::{CasOutcome, InMemoryRideRepository, RideRepository};
