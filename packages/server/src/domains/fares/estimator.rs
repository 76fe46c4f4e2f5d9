//! Per-class fare model.
//!
//! `fare = round(base + distance_km * per_km + duration_min * per_min)`,
//! rounded half away from zero. Constants are fixed per vehicle class and
//! the estimate is a pure function of its inputs - the fare a ride is
//! created with is never recomputed.

use serde::Serialize;
use thiserror::Error;

use crate::domains::rides::models::VehicleType;

#[derive(Error, Debug, PartialEq)]
pub enum FareError {
    #[error("distance and duration must be finite, non-negative numbers")]
    InvalidInput,
}

/// Integer price per vehicle class for one trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FareQuote {
    pub auto: u32,
    pub car: u32,
    pub moto: u32,
}

impl FareQuote {
    /// Price for the requested class.
    pub fn for_vehicle(&self, vehicle_type: VehicleType) -> u32 {
        match vehicle_type {
            VehicleType::Auto => self.auto,
            VehicleType::Car => self.car,
            VehicleType::Moto => self.moto,
        }
    }
}

struct RateCard {
    base: f64,
    per_km: f64,
    per_min: f64,
}

const AUTO: RateCard = RateCard {
    base: 30.0,
    per_km: 10.0,
    per_min: 2.0,
};

const CAR: RateCard = RateCard {
    base: 50.0,
    per_km: 15.0,
    per_min: 3.0,
};

const MOTO: RateCard = RateCard {
    base: 20.0,
    per_km: 8.0,
    per_min: 1.5,
};

fn price(card: &RateCard, distance_km: f64, duration_min: f64) -> u32 {
    (card.base + distance_km * card.per_km + duration_min * card.per_min).round() as u32
}

/// Estimate the fare for every vehicle class.
pub fn estimate(distance_km: f64, duration_min: f64) -> Result<FareQuote, FareError> {
    if !distance_km.is_finite() || !duration_min.is_finite() || distance_km < 0.0 || duration_min < 0.0
    {
        return Err(FareError::InvalidInput);
    }

    Ok(FareQuote {
        auto: price(&AUTO, distance_km, duration_min),
        car: price(&CAR, distance_km, duration_min),
        moto: price(&MOTO, distance_km, duration_min),
    })
}
