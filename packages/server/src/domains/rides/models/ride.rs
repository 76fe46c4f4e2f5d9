//! Ride model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::common::{CaptainId, RideId, RiderId};

/// Closed set of vehicle classes. Wire strings: `auto|car|moto`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleType {
    Auto,
    Car,
    Moto,
}

impl VehicleType {
    pub fn as_str(self) -> &'static str {
        match self {
            VehicleType::Auto => "auto",
            VehicleType::Car => "car",
            VehicleType::Moto => "moto",
        }
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ride status. Wire strings: `requested|accepted|ongoing|completed|cancelled`.
///
/// `Completed` and `Cancelled` are terminal - no transition leaves them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RideStatus {
    Requested,
    Accepted,
    Ongoing,
    Completed,
    Cancelled,
}

impl RideStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            RideStatus::Requested => "requested",
            RideStatus::Accepted => "accepted",
            RideStatus::Ongoing => "ongoing",
            RideStatus::Completed => "completed",
            RideStatus::Cancelled => "cancelled",
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, RideStatus::Completed | RideStatus::Cancelled)
    }
}

impl fmt::Display for RideStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A ride, from request to completion.
///
/// `captain_id` is unset exactly while the status is `Requested`. Fare,
/// distance and duration are fixed at creation and never recomputed.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ride {
    pub id: RideId,
    pub rider_id: RiderId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub captain_id: Option<CaptainId>,
    pub pickup: String,
    pub destination: String,
    pub vehicle_type: VehicleType,
    pub fare: u32,
    pub distance_meters: u32,
    pub duration_seconds: u32,
    /// Never serialized: the passcode only leaves storage through the
    /// rider-scoped OTP lookup.
    #[serde(skip_serializing)]
    pub otp: String,
    pub status: RideStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
    pub requested_at: DateTime<Utc>,
}

impl Ride {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        rider_id: RiderId,
        pickup: String,
        destination: String,
        vehicle_type: VehicleType,
        fare: u32,
        distance_meters: u32,
        duration_seconds: u32,
        otp: String,
    ) -> Self {
        Self {
            id: RideId::new(),
            rider_id,
            captain_id: None,
            pickup,
            destination,
            vehicle_type,
            fare,
            distance_meters,
            duration_seconds,
            otp,
            status: RideStatus::Requested,
            payment_id: None,
            order_id: None,
            signature: None,
            requested_at: Utc::now(),
        }
    }

    pub fn is_assigned_to(&self, captain_id: CaptainId) -> bool {
        self.captain_id == Some(captain_id)
    }
}

/// Opaque payment identifiers recorded by the external payment flow after
/// completion. Not validated here.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PaymentAttachment {
    pub payment_id: Option<String>,
    pub order_id: Option<String>,
    pub signature: Option<String>,
}
