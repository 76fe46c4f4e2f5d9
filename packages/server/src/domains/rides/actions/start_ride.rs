//! Start ride action - the OTP gate.

use tracing::{info, instrument, warn};

use super::notify_rider;
use crate::common::{CaptainId, RideId};
use crate::domains::rides::errors::RideError;
use crate::domains::rides::events::RIDE_STARTED;
use crate::domains::rides::models::{Ride, RideStatus};
use crate::domains::rides::repository::CasOutcome;
use crate::kernel::ServerDeps;

/// Begin the trip once the assigned captain presents the rider's passcode.
///
/// The OTP check is an exact string comparison against the stored 6-digit
/// code. A mismatch is a reported domain error, not a transient fault to
/// retry, and the error never reveals the stored value.
#[instrument(skip(deps, otp))]
pub async fn start_ride(
    deps: &ServerDeps,
    ride_id: RideId,
    captain_id: CaptainId,
    otp: &str,
) -> Result<Ride, RideError> {
    let ride = deps
        .rides
        .get(ride_id)
        .await?
        .ok_or(RideError::NotFound)?;

    if !ride.is_assigned_to(captain_id) {
        return Err(RideError::Unauthorized);
    }
    if ride.status != RideStatus::Accepted {
        return Err(RideError::PreconditionFailed {
            expected: RideStatus::Accepted,
            actual: ride.status,
        });
    }
    if ride.otp != otp {
        warn!(%ride_id, %captain_id, "otp mismatch");
        return Err(RideError::InvalidOtp);
    }

    let outcome = deps
        .rides
        .compare_and_swap_status(ride_id, RideStatus::Accepted, RideStatus::Ongoing, None)
        .await?;

    let ride = match outcome {
        CasOutcome::Updated(ride) => ride,
        CasOutcome::StatusMismatch { actual } => {
            // Lost a race between the check above and the update
            return Err(RideError::PreconditionFailed {
                expected: RideStatus::Accepted,
                actual,
            });
        }
        CasOutcome::NotFound => return Err(RideError::NotFound),
    };

    info!(%ride_id, "ride started");
    notify_rider(deps, &ride, RIDE_STARTED).await;
    Ok(ride)
}
