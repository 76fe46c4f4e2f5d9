//! Candidate search and offer broadcast.

use std::sync::Arc;
use tracing::{debug, instrument};

use crate::common::{CaptainId, ConnectionHandle, Coordinates};
use crate::domains::captains::CaptainLocationRegistry;
use crate::domains::maps::geo;
use crate::domains::rides::events::NEW_RIDE;
use crate::kernel::traits::BaseNotifier;

/// A captain eligible to receive a ride offer.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub captain_id: CaptainId,
    pub connection: Option<ConnectionHandle>,
}

/// Every captain whose last known location lies within `radius_km` of the
/// pickup point, boundary included. No availability or vehicle-class
/// filtering, and no ordering guarantee. An empty result is not an error;
/// the caller decides how to react.
#[instrument(skip(registry))]
pub async fn find_candidates(
    registry: &CaptainLocationRegistry,
    pickup: Coordinates,
    radius_km: f64,
) -> Vec<Candidate> {
    let candidates: Vec<Candidate> = registry
        .records()
        .await
        .into_iter()
        .filter(|record| geo::haversine_km(pickup, record.coordinates) <= radius_km)
        .map(|record| Candidate {
            captain_id: record.captain_id,
            connection: record.connection,
        })
        .collect();

    debug!(count = candidates.len(), radius_km, "candidates in radius");
    candidates
}

/// Push one `new-ride` offer to every candidate.
///
/// Each push is spawned on its own task: a slow or dead connection cannot
/// delay the others, delivery is not confirmed, and once started the
/// fan-out runs to completion regardless of the caller. Candidates that
/// never bound a connection are skipped.
pub fn broadcast_offer(
    notifier: Arc<dyn BaseNotifier>,
    candidates: Vec<Candidate>,
    ride: serde_json::Value,
) {
    for candidate in candidates {
        match candidate.connection {
            Some(connection) => {
                let notifier = notifier.clone();
                let payload = ride.clone();
                tokio::spawn(async move {
                    notifier.push(&connection, NEW_RIDE, payload).await;
                });
            }
            None => debug!(
                captain_id = %candidate.captain_id,
                "candidate has no live connection, offer skipped"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::test_dependencies::RecordingNotifier;

    #[tokio::test]
    async fn test_radius_boundary_is_included() {
        let registry = CaptainLocationRegistry::new();
        let pickup = Coordinates::new(12.9716, 77.5946);
        let near = Coordinates::new(12.9800, 77.6000);

        let on_boundary = CaptainId::new();
        registry.update_location(on_boundary, near).await;

        // Radius set to the exact distance: the captain must match
        let radius = geo::haversine_km(pickup, near);
        let candidates = find_candidates(&registry, pickup, radius).await;
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].captain_id, on_boundary);

        // Any smaller radius excludes them
        let candidates = find_candidates(&registry, pickup, radius * 0.999).await;
        assert!(candidates.is_empty());
    }

    #[tokio::test]
    async fn test_only_captains_in_radius_match() {
        let registry = CaptainLocationRegistry::new();
        let pickup = Coordinates::new(12.9716, 77.5946);

        let close = CaptainId::new();
        let far = CaptainId::new();
        registry
            .update_location(close, Coordinates::new(12.9750, 77.5950))
            .await;
        registry
            .update_location(far, Coordinates::new(13.5000, 78.0000))
            .await;

        let candidates = find_candidates(&registry, pickup, 5.0).await;
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].captain_id, close);
    }

    #[tokio::test]
    async fn test_empty_registry_yields_no_candidates() {
        let registry = CaptainLocationRegistry::new();
        let candidates =
            find_candidates(&registry, Coordinates::new(0.0, 0.0), 100.0).await;
        assert!(candidates.is_empty());
    }

    #[tokio::test]
    async fn test_broadcast_pushes_to_connected_candidates_only() {
        let notifier = Arc::new(RecordingNotifier::new());

        let connected_a = CaptainId::new();
        let connected_b = CaptainId::new();
        let unbound = CaptainId::new();
        let candidates = vec![
            Candidate {
                captain_id: connected_a,
                connection: Some(ConnectionHandle::for_captain(connected_a)),
            },
            Candidate {
                captain_id: connected_b,
                connection: Some(ConnectionHandle::for_captain(connected_b)),
            },
            Candidate {
                captain_id: unbound,
                connection: None,
            },
        ];

        broadcast_offer(
            notifier.clone(),
            candidates,
            serde_json::json!({"fare": 55}),
        );

        let pushes = notifier.wait_for(2).await;
        assert_eq!(pushes.len(), 2);
        assert!(pushes.iter().all(|push| push.event == NEW_RIDE));
    }
}
