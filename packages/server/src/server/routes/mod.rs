// HTTP routes

pub mod captains;
pub mod health;
pub mod maps;
pub mod rides;
pub mod stream;

pub use captains::*;
pub use health::*;
pub use maps::*;
pub use rides::*;
pub use stream::*;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::error;

use crate::domains::maps::MapsError;
use crate::domains::rides::RideError;

fn error_body(status: StatusCode, message: String) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

impl IntoResponse for RideError {
    fn into_response(self) -> Response {
        let status = match &self {
            RideError::Validation(_) => StatusCode::BAD_REQUEST,
            RideError::NotFound => StatusCode::NOT_FOUND,
            RideError::Unauthorized => StatusCode::UNAUTHORIZED,
            RideError::PreconditionFailed { .. } => StatusCode::CONFLICT,
            RideError::InvalidOtp => StatusCode::UNPROCESSABLE_ENTITY,
            // An unresolvable address is the caller's input, not an outage
            RideError::Upstream(MapsError::NotFound { .. }) => StatusCode::UNPROCESSABLE_ENTITY,
            RideError::Upstream(_) => StatusCode::SERVICE_UNAVAILABLE,
            RideError::Internal(err) => {
                error!(error = %err, "internal error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        error_body(status, self.to_string())
    }
}

impl IntoResponse for MapsError {
    fn into_response(self) -> Response {
        let status = match &self {
            MapsError::NotFound { .. } => StatusCode::NOT_FOUND,
            MapsError::NoRoute => StatusCode::NOT_FOUND,
            MapsError::UpstreamUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        };
        error_body(status, self.to_string())
    }
}
