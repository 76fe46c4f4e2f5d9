use thiserror::Error;

use crate::domains::maps::MapsError;
use crate::domains::rides::models::RideStatus;

/// Ride lifecycle errors.
///
/// Every transition failure is surfaced to the caller with enough detail
/// to tell these apart; nothing is retried automatically.
#[derive(Error, Debug)]
pub enum RideError {
    /// Missing or malformed input - the caller's fault.
    #[error("{0}")]
    Validation(String),

    #[error("ride not found")]
    NotFound,

    /// The ride is not in the status this transition requires.
    #[error("ride is {actual}, expected {expected}")]
    PreconditionFailed {
        expected: RideStatus,
        actual: RideStatus,
    },

    /// Supplied passcode does not match the stored one. The stored value
    /// is never echoed back.
    #[error("invalid otp")]
    InvalidOtp,

    /// Caller is not the party this operation is scoped to.
    #[error("caller is not a party to this ride")]
    Unauthorized,

    /// Geocoding or routing failed while resolving the trip.
    #[error(transparent)]
    Upstream(#[from] MapsError),

    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}
