//! Domain facade over the geocoding and routing providers.
//!
//! Routing has a fallback chain: the external provider first, then a
//! great-circle estimate computed from the geocoded endpoints. Only
//! geocoding failures propagate to callers - a reachable, geocodable
//! trip always resolves to some estimate.

use tracing::{instrument, warn};

use crate::common::Coordinates;
use crate::domains::maps::errors::MapsError;
use crate::domains::maps::geo;
use crate::domains::maps::types::{PlaceSuggestion, RouteEstimate, TripResolution};
use crate::kernel::ServerDeps;

/// Assumed pace when estimating duration from great-circle distance.
pub const FALLBACK_MINUTES_PER_KM: f64 = 1.5;

/// Resolve a free-text address to coordinates.
#[instrument(skip(deps))]
pub async fn geocode(deps: &ServerDeps, address: &str) -> Result<Coordinates, MapsError> {
    deps.geocoder.geocode(address).await
}

/// Best-effort autocomplete. Never fails; provider trouble yields an
/// empty list.
#[instrument(skip(deps))]
pub async fn suggest(deps: &ServerDeps, input: &str) -> Vec<PlaceSuggestion> {
    match deps.geocoder.suggest(input).await {
        Ok(suggestions) => suggestions,
        Err(err) => {
            warn!(error = %err, input, "suggestion lookup failed");
            Vec::new()
        }
    }
}

/// Geocode both trip endpoints and estimate the route between them.
///
/// Routing failures of any kind fall back to the great-circle estimate;
/// only geocoding errors surface.
#[instrument(skip(deps))]
pub async fn resolve_trip(
    deps: &ServerDeps,
    pickup: &str,
    destination: &str,
) -> Result<TripResolution, MapsError> {
    let pickup_coords = deps.geocoder.geocode(pickup).await?;
    let destination_coords = deps.geocoder.geocode(destination).await?;

    let route = match deps
        .route_provider
        .route(pickup_coords, destination_coords)
        .await
    {
        Ok(route) => route,
        Err(err) => {
            warn!(error = %err, "routing provider failed, using great-circle estimate");
            let distance_km = geo::haversine_km(pickup_coords, destination_coords);
            RouteEstimate {
                distance_km,
                duration_min: distance_km * FALLBACK_MINUTES_PER_KM,
            }
        }
    };

    Ok(TripResolution {
        pickup: pickup_coords,
        destination: destination_coords,
        route,
    })
}

/// Estimated distance/time between two addresses.
pub async fn route_distance_time(
    deps: &ServerDeps,
    origin: &str,
    destination: &str,
) -> Result<RouteEstimate, MapsError> {
    resolve_trip(deps, origin, destination)
        .await
        .map(|trip| trip.route)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::test_dependencies::test_deps;

    #[tokio::test]
    async fn test_route_uses_provider_when_available() {
        let harness = test_deps();
        harness
            .geocoder
            .add_location("A", Coordinates::new(51.5237, -0.1586));
        harness
            .geocoder
            .add_location("B", Coordinates::new(51.5034, -0.1276));
        harness.route_provider.set_route(RouteEstimate {
            distance_km: 1.5,
            duration_min: 5.0,
        });

        let trip = resolve_trip(&harness.deps, "A", "B").await.unwrap();
        assert!((trip.route.distance_km - 1.5).abs() < 1e-9);
        assert!((trip.route.duration_min - 5.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_route_falls_back_to_great_circle() {
        let harness = test_deps();
        let a = Coordinates::new(51.5237, -0.1586);
        let b = Coordinates::new(51.5034, -0.1276);
        harness.geocoder.add_location("A", a);
        harness.geocoder.add_location("B", b);
        // No route configured: provider reports NoRoute, fallback engages

        let trip = resolve_trip(&harness.deps, "A", "B").await.unwrap();
        let expected_km = geo::haversine_km(a, b);
        assert!((trip.route.distance_km - expected_km).abs() < 1e-9);
        assert!((trip.route.duration_min - expected_km * FALLBACK_MINUTES_PER_KM).abs() < 1e-9);
        assert_eq!(trip.pickup, a);
        assert_eq!(trip.destination, b);
    }

    #[tokio::test]
    async fn test_fallback_covers_provider_outage() {
        let harness = test_deps();
        let a = Coordinates::new(44.98, -93.27);
        let b = Coordinates::new(44.95, -93.09);
        harness.geocoder.add_location("A", a);
        harness.geocoder.add_location("B", b);
        harness.route_provider.fail(true);

        // An unavailable provider must not surface for geocodable addresses
        let trip = resolve_trip(&harness.deps, "A", "B").await.unwrap();
        assert!(trip.route.distance_km > 0.0);
    }

    #[tokio::test]
    async fn test_geocoding_failure_propagates() {
        let harness = test_deps();
        harness
            .geocoder
            .add_location("A", Coordinates::new(44.98, -93.27));

        let err = resolve_trip(&harness.deps, "A", "nowhere").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_suggest_swallows_provider_errors() {
        let harness = test_deps();
        harness.geocoder.fail(true);

        let suggestions = suggest(&harness.deps, "221B Baker").await;
        assert!(suggestions.is_empty());
    }
}
