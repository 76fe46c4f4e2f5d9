use serde::Serialize;

use crate::common::Coordinates;

/// One autocomplete match for a partial address.
#[derive(Debug, Clone, Serialize)]
pub struct PlaceSuggestion {
    pub label: String,
    pub lat: f64,
    pub lng: f64,
}

/// Estimated driving distance and time between two points.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteEstimate {
    pub distance_km: f64,
    pub duration_min: f64,
}

/// A fully resolved trip: both endpoints geocoded plus the route estimate.
#[derive(Debug, Clone, Copy)]
pub struct TripResolution {
    pub pickup: Coordinates,
    pub destination: Coordinates,
    pub route: RouteEstimate,
}
