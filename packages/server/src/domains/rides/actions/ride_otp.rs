//! Rider-scoped OTP lookup.
//!
//! The passcode is stripped from every serialized payload; this is the one
//! operation that returns it, and only to the ride's own rider.

use tracing::instrument;

use crate::common::{RideId, RiderId};
use crate::domains::rides::errors::RideError;
use crate::kernel::ServerDeps;

#[instrument(skip(deps))]
pub async fn ride_otp(
    deps: &ServerDeps,
    ride_id: RideId,
    rider_id: RiderId,
) -> Result<String, RideError> {
    let ride = deps
        .rides
        .get(ride_id)
        .await?
        .ok_or(RideError::NotFound)?;

    if ride.rider_id != rider_id {
        return Err(RideError::Unauthorized);
    }

    Ok(ride.otp)
}
