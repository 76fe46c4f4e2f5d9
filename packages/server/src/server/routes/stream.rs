//! SSE streaming endpoint.
//!
//! GET /api/streams/:role/:id
//!
//! One stream per client; the `role:id` pair doubles as the connection
//! handle that lifecycle events are addressed to. Connecting as a captain
//! binds the handle in the registry - the `join` of the socket layer this
//! replaces - and dropping the stream unbinds it.

use std::convert::Infallible;

use axum::extract::{Extension, Path};
use axum::http::StatusCode;
use axum::response::sse::{Event, KeepAlive, Sse};
use futures::stream::{self, Stream, StreamExt};
use tokio::sync::mpsc;
use tokio_stream::wrappers::errors::BroadcastStreamRecvError;
use tokio_stream::wrappers::BroadcastStream;

use crate::common::{CaptainId, ConnectionHandle};
use crate::domains::captains::CaptainEvent;
use crate::server::app::AxumAppState;

/// Reports the captain gone when the SSE stream is dropped.
struct DisconnectGuard {
    events: mpsc::Sender<CaptainEvent>,
    captain_id: CaptainId,
}

impl Drop for DisconnectGuard {
    fn drop(&mut self) {
        // Best-effort; if the channel is full or closed the record simply
        // keeps a stale handle, which pushes treat as a no-op.
        let _ = self.events.try_send(CaptainEvent::Disconnected {
            captain_id: self.captain_id,
        });
    }
}

/// SSE stream handler.
pub async fn stream_handler(
    Extension(state): Extension<AxumAppState>,
    Path((role, id)): Path<(String, String)>,
) -> Result<Sse<impl Stream<Item = Result<Event, Infallible>>>, StatusCode> {
    let uuid = uuid::Uuid::parse_str(&id).map_err(|_| StatusCode::BAD_REQUEST)?;

    let (handle, guard) = match role.as_str() {
        "rider" => (ConnectionHandle::for_rider(uuid.into()), None),
        "captain" => {
            let captain_id = CaptainId::from_uuid(uuid);
            let handle = ConnectionHandle::for_captain(captain_id);
            state
                .captain_events
                .send(CaptainEvent::Connected {
                    captain_id,
                    connection: handle.clone(),
                })
                .await
                .map_err(|_| StatusCode::SERVICE_UNAVAILABLE)?;
            let guard = DisconnectGuard {
                events: state.captain_events.clone(),
                captain_id,
            };
            (handle, Some(guard))
        }
        _ => return Err(StatusCode::BAD_REQUEST),
    };

    let rx = state.stream_hub.subscribe(handle.topic()).await;

    // Stream with connected event and lag handling
    let connected =
        stream::once(async { Ok::<_, Infallible>(Event::default().event("connected").data("ok")) });

    let events = BroadcastStream::new(rx).filter_map(move |result| {
        // The guard lives as long as the stream does
        let _bound = &guard;
        let event = match result {
            Ok(value) => {
                let event_name = value
                    .get("type")
                    .and_then(|t| t.as_str())
                    .unwrap_or("message")
                    .to_string();
                Event::default().event(event_name).json_data(&value).ok()
            }
            Err(BroadcastStreamRecvError::Lagged(n)) => Event::default()
                .event("lagged")
                .json_data(&serde_json::json!({ "missed": n }))
                .ok(),
        };
        async move { event.map(Ok) }
    });

    Ok(Sse::new(connected.chain(events)).keep_alive(KeepAlive::default()))
}
