//! OSRM routing client.

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, instrument};

use crate::common::Coordinates;
use crate::domains::maps::errors::MapsError;
use crate::domains::maps::types::RouteEstimate;
use crate::kernel::traits::BaseRouteProvider;

#[derive(Debug, Deserialize)]
struct OsrmRouteResponse {
    code: String,
    #[serde(default)]
    routes: Vec<OsrmRoute>,
}

#[derive(Debug, Deserialize)]
struct OsrmRoute {
    /// meters
    distance: f64,
    /// seconds
    duration: f64,
}

/// Route provider backed by an OSRM instance.
pub struct OsrmRouter {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl OsrmRouter {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            timeout,
        }
    }
}

#[async_trait]
impl BaseRouteProvider for OsrmRouter {
    #[instrument(skip(self))]
    async fn route(
        &self,
        origin: Coordinates,
        destination: Coordinates,
    ) -> Result<RouteEstimate, MapsError> {
        // OSRM takes lng,lat pairs
        let url = format!(
            "{}/route/v1/driving/{},{};{},{}?overview=false",
            self.base_url, origin.lng, origin.lat, destination.lng, destination.lat
        );

        let response = self
            .client
            .get(&url)
            .timeout(self.timeout)
            .send()
            .await?
            .error_for_status()?
            .json::<OsrmRouteResponse>()
            .await?;

        if response.code != "Ok" {
            return Err(MapsError::NoRoute);
        }

        let route = response.routes.first().ok_or(MapsError::NoRoute)?;

        let estimate = RouteEstimate {
            distance_km: route.distance / 1000.0,
            duration_min: route.duration / 60.0,
        };
        debug!(
            distance_km = estimate.distance_km,
            duration_min = estimate.duration_min,
            "route resolved"
        );
        Ok(estimate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_parsing_converts_units() {
        let json = r#"{"code":"Ok","routes":[{"distance":1500.0,"duration":300.0}]}"#;
        let response: OsrmRouteResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.code, "Ok");
        let route = &response.routes[0];
        assert!((route.distance / 1000.0 - 1.5).abs() < 1e-9);
        assert!((route.duration / 60.0 - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_response_without_routes_deserializes() {
        let json = r#"{"code":"NoRoute"}"#;
        let response: OsrmRouteResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.code, "NoRoute");
        assert!(response.routes.is_empty());
    }
}
