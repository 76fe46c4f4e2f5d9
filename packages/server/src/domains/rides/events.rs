//! Real-time event names emitted by the ride lifecycle.

/// Offer pushed to each dispatch candidate.
pub const NEW_RIDE: &str = "new-ride";
/// A captain accepted; pushed to the rider.
pub const RIDE_CONFIRMED: &str = "ride-confirmed";
/// OTP verified, trip underway; pushed to the rider.
pub const RIDE_STARTED: &str = "ride-started";
/// Trip completed; pushed to the rider.
pub const RIDE_ENDED: &str = "ride-ended";
