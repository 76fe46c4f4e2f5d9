//! Captain location endpoint.

use axum::extract::Extension;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use tracing::warn;

use crate::common::Coordinates;
use crate::domains::captains::CaptainEvent;
use crate::server::app::AxumAppState;
use crate::server::identity::CaptainIdentity;

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LocationUpdateBody {
    pub lat: f64,
    pub lng: f64,
}

/// POST /api/captains/location - periodic location push.
///
/// The update is enqueued for the registry worker; the handler does not
/// touch registry state itself.
pub async fn update_location_handler(
    Extension(state): Extension<AxumAppState>,
    captain: CaptainIdentity,
    Json(body): Json<LocationUpdateBody>,
) -> StatusCode {
    if !body.lat.is_finite()
        || !body.lng.is_finite()
        || body.lat.abs() > 90.0
        || body.lng.abs() > 180.0
    {
        return StatusCode::BAD_REQUEST;
    }

    let event = CaptainEvent::LocationUpdated {
        captain_id: captain.0,
        coordinates: Coordinates::new(body.lat, body.lng),
    };
    if state.captain_events.send(event).await.is_err() {
        warn!("captain event worker is gone, location update dropped");
        return StatusCode::SERVICE_UNAVAILABLE;
    }

    StatusCode::NO_CONTENT
}
