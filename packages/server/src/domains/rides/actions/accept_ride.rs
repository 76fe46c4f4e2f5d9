//! Accept ride action - first captain to the conditional update wins.

use tracing::{info, instrument};

use super::notify_rider;
use crate::common::{CaptainId, RideId};
use crate::domains::rides::errors::RideError;
use crate::domains::rides::events::RIDE_CONFIRMED;
use crate::domains::rides::models::{Ride, RideStatus};
use crate::domains::rides::repository::CasOutcome;
use crate::kernel::ServerDeps;

/// Assign the ride to the accepting captain.
///
/// The transition is a compare-and-swap on `Requested`: of two captains
/// racing for the same ride, exactly one wins; the loser observes a
/// precondition failure carrying the status the winner left behind.
#[instrument(skip(deps))]
pub async fn accept_ride(
    deps: &ServerDeps,
    ride_id: RideId,
    captain_id: CaptainId,
) -> Result<Ride, RideError> {
    let outcome = deps
        .rides
        .compare_and_swap_status(
            ride_id,
            RideStatus::Requested,
            RideStatus::Accepted,
            Some(captain_id),
        )
        .await?;

    let ride = match outcome {
        CasOutcome::Updated(ride) => ride,
        CasOutcome::StatusMismatch { actual } => {
            return Err(RideError::PreconditionFailed {
                expected: RideStatus::Requested,
                actual,
            })
        }
        CasOutcome::NotFound => return Err(RideError::NotFound),
    };

    info!(%ride_id, %captain_id, "ride accepted");
    notify_rider(deps, &ride, RIDE_CONFIRMED).await;
    Ok(ride)
}
