//! Fare quote action - price a prospective trip without creating it.

use tracing::instrument;

use super::validate_address;
use crate::domains::fares::{self, FareQuote};
use crate::domains::maps::service as maps;
use crate::domains::rides::errors::RideError;
use crate::kernel::ServerDeps;

/// Per-class prices for a trip between two addresses.
#[instrument(skip(deps))]
pub async fn quote_fare(
    deps: &ServerDeps,
    pickup: &str,
    destination: &str,
) -> Result<FareQuote, RideError> {
    validate_address("pickup", pickup)?;
    validate_address("destination", destination)?;

    let route = maps::route_distance_time(deps, pickup, destination).await?;
    fares::estimate(route.distance_km, route.duration_min)
        .map_err(|err| RideError::Validation(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Coordinates;
    use crate::domains::maps::RouteEstimate;
    use crate::kernel::test_dependencies::test_deps;

    #[tokio::test]
    async fn test_quote_matches_rate_card() {
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

        let quote = quote_fare(&harness.deps, "A", "B").await.unwrap();
        assert_eq!(quote.car, 88);
        assert_eq!(quote.auto, 55);
        assert_eq!(quote.moto, 40);
    }

    #[tokio::test]
    async fn test_quote_validates_addresses() {
        let harness = test_deps();
        let err = quote_fare(&harness.deps, "", "B street 12").await.unwrap_err();
        assert!(matches!(err, RideError::Validation(_)));
    }
}
