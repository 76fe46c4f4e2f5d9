//! Server dependencies for domain actions (using traits for testability)
//!
//! This module provides the central dependency container used by all domain
//! actions. External providers sit behind trait abstractions so tests can
//! inject mocks.

use std::sync::Arc;

use crate::domains::captains::CaptainLocationRegistry;
use crate::domains::rides::RideRepository;
use crate::kernel::traits::{BaseGeocoder, BaseNotifier, BaseRouteProvider};

/// Server dependencies accessible to domain actions.
#[derive(Clone)]
pub struct ServerDeps {
    pub rides: Arc<dyn RideRepository>,
    pub captains: Arc<CaptainLocationRegistry>,
    pub geocoder: Arc<dyn BaseGeocoder>,
    pub route_provider: Arc<dyn BaseRouteProvider>,
    pub notifier: Arc<dyn BaseNotifier>,
    /// Dispatch search radius around the pickup point, in kilometers.
    pub dispatch_radius_km: f64,
}

impl ServerDeps {
    pub fn new(
        rides: Arc<dyn RideRepository>,
        captains: Arc<CaptainLocationRegistry>,
        geocoder: Arc<dyn BaseGeocoder>,
        route_provider: Arc<dyn BaseRouteProvider>,
        notifier: Arc<dyn BaseNotifier>,
        dispatch_radius_km: f64,
    ) -> Self {
        Self {
            rides,
            captains,
            geocoder,
            route_provider,
            notifier,
            dispatch_radius_km,
        }
    }
}
