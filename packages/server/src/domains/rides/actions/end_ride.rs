//! End ride action.

use tracing::{info, instrument};

use super::notify_rider;
use crate::common::{CaptainId, RideId};
use crate::domains::rides::errors::RideError;
use crate::domains::rides::events::RIDE_ENDED;
use crate::domains::rides::models::{Ride, RideStatus};
use crate::domains::rides::repository::CasOutcome;
use crate::kernel::ServerDeps;

/// Complete an ongoing trip. Only the assigned captain may end it;
/// `Completed` is terminal.
#[instrument(skip(deps))]
pub async fn end_ride(
    deps: &ServerDeps,
    ride_id: RideId,
    captain_id: CaptainId,
) -> Result<Ride, RideError> {
    let ride = deps
        .rides
        .get(ride_id)
        .await?
        .ok_or(RideError::NotFound)?;

    if !ride.is_assigned_to(captain_id) {
        return Err(RideError::Unauthorized);
    }
    if ride.status != RideStatus::Ongoing {
        return Err(RideError::PreconditionFailed {
            expected: RideStatus::Ongoing,
            actual: ride.status,
        });
    }

    let outcome = deps
        .rides
        .compare_and_swap_status(ride_id, RideStatus::Ongoing, RideStatus::Completed, None)
        .await?;

    let ride = match outcome {
        CasOutcome::Updated(ride) => ride,
        CasOutcome::StatusMismatch { actual } => {
            return Err(RideError::PreconditionFailed {
                expected: RideStatus::Ongoing,
                actual,
            });
        }
        CasOutcome::NotFound => return Err(RideError::NotFound),
    };

    info!(%ride_id, %captain_id, "ride completed");
    notify_rider(deps, &ride, RIDE_ENDED).await;
    Ok(ride)
}
