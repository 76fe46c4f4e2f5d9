//! Typed ID definitions for all domain entities.
//!
//! This module defines type aliases for each domain entity, providing
//! compile-time type safety for ID usage throughout the application.
//!
//! # Example
//!
//! ```rust
//! use server_core::common::{CaptainId, RideId, RiderId};
//!
//! // These are incompatible types - compiler prevents mixing them up
//! let rider_id: RiderId = RiderId::new();
//! let ride_id: RideId = RideId::new();
//!
//! // This would be a compile error:
//! // let wrong: RideId = rider_id;
//! ```

// Re-export the core Id type and version marker
pub use super::id::{Id, V7};

// ============================================================================
// Entity marker types
// ============================================================================

/// Marker type for Rider entities (trip requesters).
pub struct Rider;

/// Marker type for Captain entities (drivers).
pub struct Captain;

/// Marker type for Ride entities.
pub struct Ride;

// ============================================================================
// Type aliases - the primary API
// ============================================================================

/// Typed ID for Rider entities.
pub type RiderId = Id<Rider>;

/// Typed ID for Captain entities.
pub type CaptainId = Id<Captain>;

/// Typed ID for Ride entities.
pub type RideId = Id<Ride>;
