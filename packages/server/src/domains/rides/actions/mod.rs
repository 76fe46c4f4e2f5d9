//! Ride lifecycle actions.
//!
//! Free async functions over [`ServerDeps`], one file per operation.
//! Notification pushes are best-effort and never fail the operation that
//! triggered them.

mod accept_ride;
mod create_ride;
mod end_ride;
mod payment;
mod quote_fare;
mod ride_otp;
mod start_ride;

pub use accept_ride::accept_ride;
pub use create_ride::{create_ride, CreateRideRequest};
pub use end_ride::end_ride;
pub use payment::attach_payment;
pub use quote_fare::quote_fare;
pub use ride_otp::ride_otp;
pub use start_ride::start_ride;

use tracing::warn;

use crate::common::ConnectionHandle;
use crate::domains::rides::models::Ride;
use crate::kernel::ServerDeps;

const MIN_ADDRESS_LEN: usize = 3;

pub(crate) fn validate_address(field: &str, value: &str) -> Result<(), super::RideError> {
    if value.trim().len() < MIN_ADDRESS_LEN {
        return Err(super::RideError::Validation(format!(
            "{field} must be at least {MIN_ADDRESS_LEN} characters"
        )));
    }
    Ok(())
}

/// Push a lifecycle event to the ride's rider.
pub(crate) async fn notify_rider(deps: &ServerDeps, ride: &Ride, event: &str) {
    match serde_json::to_value(ride) {
        Ok(payload) => {
            let handle = ConnectionHandle::for_rider(ride.rider_id);
            deps.notifier.push(&handle, event, payload).await;
        }
        Err(err) => warn!(ride_id = %ride.id, error = %err, "could not serialize ride event"),
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::common::{CaptainId, RiderId};
    use crate::domains::rides::models::{Ride, RideStatus, VehicleType};
    use crate::domains::rides::repository::RideRepository;
    use crate::kernel::test_dependencies::TestDeps;

    /// Insert a ride directly in the given status, bypassing create.
    pub async fn seed_ride(
        harness: &TestDeps,
        status: RideStatus,
        captain_id: Option<CaptainId>,
    ) -> Ride {
        let mut ride = Ride::new(
            RiderId::new(),
            "221B Baker Street, London".to_string(),
            "10 Downing Street, London".to_string(),
            VehicleType::Car,
            88,
            1500,
            300,
            "123456".to_string(),
        );
        ride.status = status;
        ride.captain_id = captain_id;
        harness.rides.insert(ride.clone()).await.unwrap();
        ride
    }
}
