//! Geocoding and routing endpoints.

use axum::extract::{Extension, Query};
use axum::Json;
use serde::Deserialize;

use crate::common::Coordinates;
use crate::domains::maps::service;
use crate::domains::maps::{MapsError, PlaceSuggestion, RouteEstimate};
use crate::server::app::AxumAppState;
use crate::server::identity::RiderIdentity;

#[derive(Deserialize)]
pub struct AddressQuery {
    pub address: String,
}

/// GET /api/maps/coordinates?address=..
pub async fn coordinates_handler(
    Extension(state): Extension<AxumAppState>,
    _rider: RiderIdentity,
    Query(query): Query<AddressQuery>,
) -> Result<Json<Coordinates>, MapsError> {
    let coordinates = service::geocode(&state.deps, &query.address).await?;
    Ok(Json(coordinates))
}

#[derive(Deserialize)]
pub struct DistanceTimeQuery {
    pub origin: String,
    pub destination: String,
}

/// GET /api/maps/distance-time?origin=..&destination=..
pub async fn distance_time_handler(
    Extension(state): Extension<AxumAppState>,
    _rider: RiderIdentity,
    Query(query): Query<DistanceTimeQuery>,
) -> Result<Json<RouteEstimate>, MapsError> {
    let estimate =
        service::route_distance_time(&state.deps, &query.origin, &query.destination).await?;
    Ok(Json(estimate))
}

#[derive(Deserialize)]
pub struct SuggestionsQuery {
    pub input: String,
}

/// GET /api/maps/suggestions?input=..
///
/// Public endpoint; best-effort, an empty list on any provider trouble.
pub async fn suggestions_handler(
    Extension(state): Extension<AxumAppState>,
    Query(query): Query<SuggestionsQuery>,
) -> Json<Vec<PlaceSuggestion>> {
    Json(service::suggest(&state.deps, &query.input).await)
}
