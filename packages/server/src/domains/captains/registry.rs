//! In-memory registry of captain locations and connections.
//!
//! Last write wins per captain: an update replaces the stored value, nothing
//! is merged across updates and no history is kept. Different captains'
//! writes are independent; there is no cross-captain coordination.

use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::common::{CaptainId, ConnectionHandle, Coordinates};

/// A captain's last known state, as seen by dispatch.
#[derive(Debug, Clone, PartialEq)]
pub struct CaptainLocationRecord {
    pub captain_id: CaptainId,
    pub coordinates: Coordinates,
    pub connection: Option<ConnectionHandle>,
}

#[derive(Debug, Default, Clone)]
struct CaptainEntry {
    // None until the captain pushes a first location; such captains are
    // invisible to dispatch.
    coordinates: Option<Coordinates>,
    connection: Option<ConnectionHandle>,
}

/// Thread-safe captain registry.
#[derive(Default)]
pub struct CaptainLocationRegistry {
    entries: RwLock<HashMap<CaptainId, CaptainEntry>>,
}

impl CaptainLocationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the captain's last known coordinates.
    pub async fn update_location(&self, captain_id: CaptainId, coordinates: Coordinates) {
        let mut entries = self.entries.write().await;
        entries.entry(captain_id).or_default().coordinates = Some(coordinates);
    }

    /// Overwrite the captain's live-connection handle.
    pub async fn bind_connection(&self, captain_id: CaptainId, connection: ConnectionHandle) {
        let mut entries = self.entries.write().await;
        entries.entry(captain_id).or_default().connection = Some(connection);
    }

    /// Drop the captain's live-connection handle (stream closed).
    pub async fn clear_connection(&self, captain_id: CaptainId) {
        let mut entries = self.entries.write().await;
        if let Some(entry) = entries.get_mut(&captain_id) {
            entry.connection = None;
        }
    }

    /// The captain's record, if a location is known.
    pub async fn lookup(&self, captain_id: CaptainId) -> Option<CaptainLocationRecord> {
        let entries = self.entries.read().await;
        let entry = entries.get(&captain_id)?;
        Some(CaptainLocationRecord {
            captain_id,
            coordinates: entry.coordinates?,
            connection: entry.connection.clone(),
        })
    }

    /// Snapshot of every captain with a known location.
    pub async fn records(&self) -> Vec<CaptainLocationRecord> {
        let entries = self.entries.read().await;
        entries
            .iter()
            .filter_map(|(captain_id, entry)| {
                Some(CaptainLocationRecord {
                    captain_id: *captain_id,
                    coordinates: entry.coordinates?,
                    connection: entry.connection.clone(),
                })
            })
            .collect()
    }
}
