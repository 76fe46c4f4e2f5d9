//! Attach payment identifiers after completion.
//!
//! The identifiers come from the external payment flow and are stored
//! opaquely - nothing here validates them.

use tracing::{info, instrument};

use crate::common::{RideId, RiderId};
use crate::domains::rides::errors::RideError;
use crate::domains::rides::models::{PaymentAttachment, Ride, RideStatus};
use crate::kernel::ServerDeps;

#[instrument(skip(deps, payment))]
pub async fn attach_payment(
    deps: &ServerDeps,
    ride_id: RideId,
    rider_id: RiderId,
    payment: PaymentAttachment,
) -> Result<Ride, RideError> {
    let ride = deps
        .rides
        .get(ride_id)
        .await?
        .ok_or(RideError::NotFound)?;

    if ride.rider_id != rider_id {
        return Err(RideError::Unauthorized);
    }
    if ride.status != RideStatus::Completed {
        return Err(RideError::PreconditionFailed {
            expected: RideStatus::Completed,
            actual: ride.status,
        });
    }

    let updated = deps
        .rides
        .update_payment(ride_id, payment)
        .await?
        .ok_or(RideError::NotFound)?;

    info!(%ride_id, "payment recorded");
    Ok(updated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::CaptainId;
    use crate::domains::rides::actions::test_support::seed_ride;
    use crate::kernel::test_dependencies::test_deps;

    fn payment() -> PaymentAttachment {
        PaymentAttachment {
            payment_id: Some("pay_1".to_string()),
            order_id: Some("order_1".to_string()),
            signature: Some("sig_1".to_string()),
        }
    }

    #[tokio::test]
    async fn test_attach_payment_after_completion() {
        let harness = test_deps();
        let ride = seed_ride(&harness, RideStatus::Completed, Some(CaptainId::new())).await;

        let updated = attach_payment(&harness.deps, ride.id, ride.rider_id, payment())
            .await
            .unwrap();
        assert_eq!(updated.payment_id.as_deref(), Some("pay_1"));
    }

    #[tokio::test]
    async fn test_attach_payment_requires_completion() {
        let harness = test_deps();
        let ride = seed_ride(&harness, RideStatus::Ongoing, Some(CaptainId::new())).await;

        let err = attach_payment(&harness.deps, ride.id, ride.rider_id, payment())
            .await
            .unwrap_err();
        assert!(matches!(err, RideError::PreconditionFailed { .. }));
    }

    #[tokio::test]
    async fn test_attach_payment_is_rider_scoped() {
        let harness = test_deps();
        let ride = seed_ride(&harness, RideStatus::Completed, Some(CaptainId::new())).await;

        let err = attach_payment(&harness.deps, ride.id, RiderId::new(), payment())
            .await
            .unwrap_err();
        assert!(matches!(err, RideError::Unauthorized));
    }
}
