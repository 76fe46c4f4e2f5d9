//! Ride lifecycle endpoints.

use axum::extract::{Extension, Path, Query};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use crate::common::RideId;
use crate::domains::fares::FareQuote;
use crate::domains::rides::actions;
use crate::domains::rides::models::{PaymentAttachment, Ride};
use crate::domains::rides::RideError;
use crate::server::app::AxumAppState;
use crate::server::identity::{CaptainIdentity, RiderIdentity};

/// POST /api/rides - request a ride.
///
/// The response is the ride as persisted, minus the OTP.
pub async fn create_ride_handler(
    Extension(state): Extension<AxumAppState>,
    rider: RiderIdentity,
    Json(request): Json<actions::CreateRideRequest>,
) -> Result<(StatusCode, Json<Ride>), RideError> {
    let ride = actions::create_ride(&state.deps, rider.0, request).await?;
    Ok((StatusCode::CREATED, Json(ride)))
}

#[derive(Deserialize)]
pub struct FareQuery {
    pub pickup: String,
    pub destination: String,
}

/// GET /api/rides/fare?pickup=..&destination=..
pub async fn fare_handler(
    Extension(state): Extension<AxumAppState>,
    _rider: RiderIdentity,
    Query(query): Query<FareQuery>,
) -> Result<Json<FareQuote>, RideError> {
    let quote = actions::quote_fare(&state.deps, &query.pickup, &query.destination).await?;
    Ok(Json(quote))
}

/// GET /api/rides/:id/otp - rider-scoped passcode lookup.
pub async fn ride_otp_handler(
    Extension(state): Extension<AxumAppState>,
    rider: RiderIdentity,
    Path(ride_id): Path<RideId>,
) -> Result<Json<serde_json::Value>, RideError> {
    let otp = actions::ride_otp(&state.deps, ride_id, rider.0).await?;
    Ok(Json(json!({ "otp": otp })))
}

/// POST /api/rides/:id/accept
pub async fn accept_ride_handler(
    Extension(state): Extension<AxumAppState>,
    captain: CaptainIdentity,
    Path(ride_id): Path<RideId>,
) -> Result<Json<Ride>, RideError> {
    let ride = actions::accept_ride(&state.deps, ride_id, captain.0).await?;
    Ok(Json(ride))
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StartRideBody {
    pub otp: String,
}

/// POST /api/rides/:id/start
pub async fn start_ride_handler(
    Extension(state): Extension<AxumAppState>,
    captain: CaptainIdentity,
    Path(ride_id): Path<RideId>,
    Json(body): Json<StartRideBody>,
) -> Result<Json<Ride>, RideError> {
    let ride = actions::start_ride(&state.deps, ride_id, captain.0, &body.otp).await?;
    Ok(Json(ride))
}

/// POST /api/rides/:id/end
pub async fn end_ride_handler(
    Extension(state): Extension<AxumAppState>,
    captain: CaptainIdentity,
    Path(ride_id): Path<RideId>,
) -> Result<Json<Ride>, RideError> {
    let ride = actions::end_ride(&state.deps, ride_id, captain.0).await?;
    Ok(Json(ride))
}

/// POST /api/rides/:id/payment - record external payment identifiers.
pub async fn attach_payment_handler(
    Extension(state): Extension<AxumAppState>,
    rider: RiderIdentity,
    Path(ride_id): Path<RideId>,
    Json(payment): Json<PaymentAttachment>,
) -> Result<Json<Ride>, RideError> {
    let ride = actions::attach_payment(&state.deps, ride_id, rider.0, payment).await?;
    Ok(Json(ride))
}
