//! Ride storage seam.
//!
//! The repository is the atomicity boundary for status changes: a
//! transition is a compare-and-swap on the status field, so two captains
//! racing to accept the same ride cannot both win. Rides are never
//! deleted; completed and cancelled rides stay for history and payment
//! reconciliation.

use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::common::{CaptainId, RideId};
use crate::domains::rides::models::{PaymentAttachment, Ride, RideStatus};

/// Result of a conditional status update.
#[derive(Debug, Clone)]
pub enum CasOutcome {
    /// The ride was in the expected status and has been transitioned.
    Updated(Ride),
    /// The ride exists but its status did not match; nothing changed.
    StatusMismatch { actual: RideStatus },
    NotFound,
}

#[async_trait]
pub trait RideRepository: Send + Sync {
    async fn insert(&self, ride: Ride) -> Result<()>;

    async fn get(&self, id: RideId) -> Result<Option<Ride>>;

    /// Atomically transition `expected -> next`, assigning the captain when
    /// given. The status check and the mutation are observed as one step
    /// with respect to every other status-changing call for the same ride.
    async fn compare_and_swap_status(
        &self,
        id: RideId,
        expected: RideStatus,
        next: RideStatus,
        assign_captain: Option<CaptainId>,
    ) -> Result<CasOutcome>;

    /// Record opaque payment identifiers. Returns the updated ride, or
    /// `None` if the ride does not exist.
    async fn update_payment(
        &self,
        id: RideId,
        payment: PaymentAttachment,
    ) -> Result<Option<Ride>>;
}

/// In-memory repository.
///
/// The write lock is held across the status check and the mutation, which
/// is exactly the conditional-update guarantee a database-backed
/// implementation would get from `UPDATE .. WHERE status = $expected`.
#[derive(Default)]
pub struct InMemoryRideRepository {
    rides: RwLock<HashMap<RideId, Ride>>,
}

impl InMemoryRideRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RideRepository for InMemoryRideRepository {
    async fn insert(&self, ride: Ride) -> Result<()> {
        let mut rides = self.rides.write().await;
        rides.insert(ride.id, ride);
        Ok(())
    }

    async fn get(&self, id: RideId) -> Result<Option<Ride>> {
        let rides = self.rides.read().await;
        Ok(rides.get(&id).cloned())
    }

    async fn compare_and_swap_status(
        &self,
        id: RideId,
        expected: RideStatus,
        next: RideStatus,
        assign_captain: Option<CaptainId>,
    ) -> Result<CasOutcome> {
        let mut rides = self.rides.write().await;

        let ride = match rides.get_mut(&id) {
            Some(ride) => ride,
            None => return Ok(CasOutcome::NotFound),
        };

        if ride.status != expected {
            return Ok(CasOutcome::StatusMismatch {
                actual: ride.status,
            });
        }

        ride.status = next;
        if let Some(captain_id) = assign_captain {
            ride.captain_id = Some(captain_id);
        }

        Ok(CasOutcome::Updated(ride.clone()))
    }

    async fn update_payment(
        &self,
        id: RideId,
        payment: PaymentAttachment,
    ) -> Result<Option<Ride>> {
        let mut rides = self.rides.write().await;

        let ride = match rides.get_mut(&id) {
            Some(ride) => ride,
            None => return Ok(None),
        };

        ride.payment_id = payment.payment_id;
        ride.order_id = payment.order_id;
        ride.signature = payment.signature;

        Ok(Some(ride.clone()))
    }
}
