//! Inbound captain connection events as a message-passing boundary.
//!
//! Stream connects, periodic location pushes and disconnects arrive as
//! discrete messages on one channel; a single worker task applies them to
//! the registry. Handlers share no mutable state beyond the registry itself.

use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::debug;

use crate::common::{CaptainId, ConnectionHandle, Coordinates};
use crate::domains::captains::registry::CaptainLocationRegistry;

/// One inbound event from a captain's client.
#[derive(Debug, Clone)]
pub enum CaptainEvent {
    Connected {
        captain_id: CaptainId,
        connection: ConnectionHandle,
    },
    LocationUpdated {
        captain_id: CaptainId,
        coordinates: Coordinates,
    },
    Disconnected {
        captain_id: CaptainId,
    },
}

/// Consume captain events until the channel closes.
pub async fn run_captain_worker(
    mut rx: mpsc::Receiver<CaptainEvent>,
    registry: Arc<CaptainLocationRegistry>,
) {
    while let Some(event) = rx.recv().await {
        match event {
            CaptainEvent::Connected {
                captain_id,
                connection,
            } => {
                debug!(%captain_id, %connection, "captain connected");
                registry.bind_connection(captain_id, connection).await;
            }
            CaptainEvent::LocationUpdated {
                captain_id,
                coordinates,
            } => {
                registry.update_location(captain_id, coordinates).await;
            }
            CaptainEvent::Disconnected { captain_id } => {
                debug!(%captain_id, "captain disconnected");
                registry.clear_connection(captain_id).await;
            }
        }
    }
    debug!("captain event channel closed, worker exiting");
}
