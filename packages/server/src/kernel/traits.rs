// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic. Business logic
// (like "create a ride") lives in domain actions that use these traits.
//
// Naming convention: Base* for trait names (e.g., BaseGeocoder, BaseNotifier)

use async_trait::async_trait;

use crate::common::{ConnectionHandle, Coordinates};
use crate::domains::maps::{MapsError, PlaceSuggestion, RouteEstimate};

// =============================================================================
// Geocoding Trait (Infrastructure)
// =============================================================================

#[async_trait]
pub trait BaseGeocoder: Send + Sync {
    /// Resolve a free-text address to coordinates.
    ///
    /// `NotFound` when the provider has no match; never a fabricated
    /// zero coordinate.
    async fn geocode(&self, address: &str) -> Result<Coordinates, MapsError>;

    /// Autocomplete matches for a partial address, best first.
    async fn suggest(&self, input: &str) -> Result<Vec<PlaceSuggestion>, MapsError>;
}

// =============================================================================
// Routing Trait (Infrastructure)
// =============================================================================

#[async_trait]
pub trait BaseRouteProvider: Send + Sync {
    /// Driving distance and time between two coordinate pairs.
    async fn route(
        &self,
        origin: Coordinates,
        destination: Coordinates,
    ) -> Result<RouteEstimate, MapsError>;
}

// =============================================================================
// Notification Trait (Infrastructure)
// =============================================================================

#[async_trait]
pub trait BaseNotifier: Send + Sync {
    /// Deliver one event to one client, best-effort.
    ///
    /// Exactly one attempt; an absent or stale handle is a no-op, never an
    /// error. Delivery is not confirmed and not retried.
    async fn push(&self, handle: &ConnectionHandle, event: &str, payload: serde_json::Value);
}
