//! Caller identity extractors.
//!
//! Session and token handling belong to the fronting auth provider; by the
//! time a request reaches this service the caller has been resolved to an
//! id carried in the `x-rider-id` / `x-captain-id` header. The extractors
//! only parse that id - a missing or malformed header is a 401.

use axum::extract::FromRequestParts;
use axum::http::{request::Parts, StatusCode};

use crate::common::{CaptainId, RiderId};

const RIDER_HEADER: &str = "x-rider-id";
const CAPTAIN_HEADER: &str = "x-captain-id";

/// The authenticated rider making the request.
#[derive(Debug, Clone, Copy)]
pub struct RiderIdentity(pub RiderId);

/// The authenticated captain making the request.
#[derive(Debug, Clone, Copy)]
pub struct CaptainIdentity(pub CaptainId);

fn header_uuid(parts: &Parts, name: &str) -> Result<uuid::Uuid, StatusCode> {
    let value = parts
        .headers
        .get(name)
        .ok_or(StatusCode::UNAUTHORIZED)?
        .to_str()
        .map_err(|_| StatusCode::UNAUTHORIZED)?;
    uuid::Uuid::parse_str(value).map_err(|_| StatusCode::UNAUTHORIZED)
}

#[axum::async_trait]
impl<S> FromRequestParts<S> for RiderIdentity
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        header_uuid(parts, RIDER_HEADER).map(|uuid| Self(RiderId::from_uuid(uuid)))
    }
}

#[axum::async_trait]
impl<S> FromRequestParts<S> for CaptainIdentity
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        header_uuid(parts, CAPTAIN_HEADER).map(|uuid| Self(CaptainId::from_uuid(uuid)))
    }
}
