//! Create ride action - price the trip, persist it, offer it around.

use serde::Deserialize;
use tracing::{info, instrument, warn};

use super::validate_address;
use crate::common::RiderId;
use crate::domains::dispatch;
use crate::domains::fares;
use crate::domains::maps::service as maps;
use crate::domains::rides::errors::RideError;
use crate::domains::rides::models::{Ride, VehicleType};
use crate::domains::rides::otp::generate_otp;
use crate::kernel::ServerDeps;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateRideRequest {
    pub pickup: String,
    pub destination: String,
    pub vehicle_type: VehicleType,
}

/// Create a ride and fan out offers to nearby captains.
///
/// The trip is resolved and priced before anything is stored; the fare on
/// the persisted ride is final. Candidate search and the offer broadcast
/// happen after persistence and are best-effort - the ride exists whether
/// or not anyone could be notified.
#[instrument(skip(deps, request), fields(%rider_id))]
pub async fn create_ride(
    deps: &ServerDeps,
    rider_id: RiderId,
    request: CreateRideRequest,
) -> Result<Ride, RideError> {
    validate_address("pickup", &request.pickup)?;
    validate_address("destination", &request.destination)?;

    let trip = maps::resolve_trip(deps, &request.pickup, &request.destination).await?;
    let quote = fares::estimate(trip.route.distance_km, trip.route.duration_min)
        .map_err(|err| RideError::Validation(err.to_string()))?;
    let fare = quote.for_vehicle(request.vehicle_type);

    let ride = Ride::new(
        rider_id,
        request.pickup.trim().to_string(),
        request.destination.trim().to_string(),
        request.vehicle_type,
        fare,
        (trip.route.distance_km * 1000.0).round() as u32,
        (trip.route.duration_min * 60.0).round() as u32,
        generate_otp(),
    );
    deps.rides.insert(ride.clone()).await?;
    info!(ride_id = %ride.id, fare, vehicle_type = %ride.vehicle_type, "ride created");

    let candidates =
        dispatch::find_candidates(&deps.captains, trip.pickup, deps.dispatch_radius_km).await;
    if candidates.is_empty() {
        warn!(
            ride_id = %ride.id,
            radius_km = deps.dispatch_radius_km,
            "no captains in dispatch radius"
        );
    }

    match serde_json::to_value(&ride) {
        Ok(payload) => dispatch::broadcast_offer(deps.notifier.clone(), candidates, payload),
        Err(err) => warn!(ride_id = %ride.id, error = %err, "could not serialize ride offer"),
    }

    Ok(ride)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{CaptainId, ConnectionHandle, Coordinates};
    use crate::domains::maps::{MapsError, RouteEstimate};
    use crate::domains::rides::events::NEW_RIDE;
    use crate::domains::rides::models::RideStatus;
    use crate::domains::rides::repository::RideRepository;
    use crate::kernel::test_dependencies::test_deps;

    const PICKUP: &str = "221B Baker Street, London";
    const DESTINATION: &str = "10 Downing Street, London";

    fn request() -> CreateRideRequest {
        CreateRideRequest {
            pickup: PICKUP.to_string(),
            destination: DESTINATION.to_string(),
            vehicle_type: VehicleType::Car,
        }
    }

    fn wire_up_trip(harness: &crate::kernel::test_dependencies::TestDeps) {
        harness
            .geocoder
            .add_location(PICKUP, Coordinates::new(51.5237, -0.1586));
        harness
            .geocoder
            .add_location(DESTINATION, Coordinates::new(51.5034, -0.1276));
        harness.route_provider.set_route(RouteEstimate {
            distance_km: 1.5,
            duration_min: 5.0,
        });
    }

    #[tokio::test]
    async fn test_create_prices_and_persists_the_ride() {
        let harness = test_deps();
        wire_up_trip(&harness);

        let ride = create_ride(&harness.deps, RiderId::new(), request())
            .await
            .unwrap();

        // round(50 + 1.5*15 + 5*3) = round(87.5) = 88
        assert_eq!(ride.fare, 88);
        assert_eq!(ride.status, RideStatus::Requested);
        assert_eq!(ride.distance_meters, 1500);
        assert_eq!(ride.duration_seconds, 300);
        assert!(ride.captain_id.is_none());
        assert_eq!(ride.otp.len(), 6);

        let stored = harness.rides.get(ride.id).await.unwrap().unwrap();
        assert_eq!(stored.otp, ride.otp);
    }

    #[tokio::test]
    async fn test_create_response_payload_has_no_otp() {
        let harness = test_deps();
        wire_up_trip(&harness);

        let ride = create_ride(&harness.deps, RiderId::new(), request())
            .await
            .unwrap();

        let payload = serde_json::to_value(&ride).unwrap();
        assert!(payload.get("otp").is_none());
    }

    #[tokio::test]
    async fn test_create_broadcasts_to_captains_in_radius() {
        let harness = test_deps();
        wire_up_trip(&harness);

        let nearby = CaptainId::new();
        let far_away = CaptainId::new();
        harness
            .captains
            .update_location(nearby, Coordinates::new(51.5240, -0.1590))
            .await;
        harness
            .captains
            .bind_connection(nearby, ConnectionHandle::for_captain(nearby))
            .await;
        harness
            .captains
            .update_location(far_away, Coordinates::new(52.2053, 0.1218))
            .await;
        harness
            .captains
            .bind_connection(far_away, ConnectionHandle::for_captain(far_away))
            .await;

        create_ride(&harness.deps, RiderId::new(), request())
            .await
            .unwrap();

        let pushes = harness.notifier.wait_for(1).await;
        assert_eq!(pushes.len(), 1);
        assert_eq!(pushes[0].event, NEW_RIDE);
        assert_eq!(
            pushes[0].handle,
            ConnectionHandle::for_captain(nearby)
        );
        // The offer payload carries the ride but never the passcode
        assert!(pushes[0].payload.get("otp").is_none());
    }

    #[tokio::test]
    async fn test_create_rejects_short_addresses() {
        let harness = test_deps();
        let err = create_ride(
            &harness.deps,
            RiderId::new(),
            CreateRideRequest {
                pickup: "a".to_string(),
                destination: DESTINATION.to_string(),
                vehicle_type: VehicleType::Auto,
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, RideError::Validation(_)));
    }

    #[tokio::test]
    async fn test_create_surfaces_geocoding_failure() {
        let harness = test_deps();
        // No locations registered: pickup cannot be geocoded

        let err = create_ride(&harness.deps, RiderId::new(), request())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            RideError::Upstream(MapsError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_create_survives_routing_outage_via_fallback() {
        let harness = test_deps();
        harness
            .geocoder
            .add_location(PICKUP, Coordinates::new(51.5237, -0.1586));
        harness
            .geocoder
            .add_location(DESTINATION, Coordinates::new(51.5034, -0.1276));
        harness.route_provider.fail(true);

        let ride = create_ride(&harness.deps, RiderId::new(), request())
            .await
            .unwrap();
        assert!(ride.fare > 0);
        assert!(ride.distance_meters > 0);
    }
}
