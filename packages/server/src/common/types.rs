//! Shared wire types used across domains.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::common::{CaptainId, RiderId};

/// A WGS84 coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lat, self.lng)
    }
}

/// Opaque address of one client's live event stream.
///
/// The handle doubles as the stream-hub topic the client is subscribed to.
/// It is minted when a client opens its stream and goes stale when the
/// stream closes; pushes to a stale handle are dropped, not retried.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConnectionHandle(String);

impl ConnectionHandle {
    /// Handle for a rider's stream.
    pub fn for_rider(id: RiderId) -> Self {
        Self(format!("rider:{}", id))
    }

    /// Handle for a captain's stream.
    pub fn for_captain(id: CaptainId) -> Self {
        Self(format!("captain:{}", id))
    }

    /// The stream-hub topic this handle addresses.
    pub fn topic(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConnectionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_topics_are_role_scoped() {
        let rider = RiderId::new();
        let captain = CaptainId::new();

        assert_eq!(
            ConnectionHandle::for_rider(rider).topic(),
            format!("rider:{}", rider)
        );
        assert_eq!(
            ConnectionHandle::for_captain(captain).topic(),
            format!("captain:{}", captain)
        );
    }
}
