//! NotificationGateway over the stream hub.
//!
//! Events are addressed by connection handle (the client's stream topic)
//! and wrapped in a `{"type": .., "data": ..}` envelope the SSE endpoint
//! understands. Delivery is fire-and-forget: one publish, no retry, and a
//! handle nobody is listening on is just a logged drop.

use async_trait::async_trait;
use serde_json::json;
use tracing::debug;

use crate::common::ConnectionHandle;
use crate::kernel::stream_hub::StreamHub;
use crate::kernel::traits::BaseNotifier;

/// Production notifier backed by the in-process [`StreamHub`].
#[derive(Clone)]
pub struct StreamNotifier {
    hub: StreamHub,
}

impl StreamNotifier {
    pub fn new(hub: StreamHub) -> Self {
        Self { hub }
    }
}

#[async_trait]
impl BaseNotifier for StreamNotifier {
    async fn push(&self, handle: &ConnectionHandle, event: &str, payload: serde_json::Value) {
        let envelope = json!({ "type": event, "data": payload });
        let delivered = self.hub.publish(handle.topic(), envelope).await;
        if delivered == 0 {
            debug!(%handle, event, "no live subscriber, event dropped");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::RiderId;

    #[tokio::test]
    async fn test_push_reaches_subscriber() {
        let hub = StreamHub::new();
        let notifier = StreamNotifier::new(hub.clone());
        let handle = ConnectionHandle::for_rider(RiderId::new());

        let mut rx = hub.subscribe(handle.topic()).await;
        notifier
            .push(&handle, "ride-confirmed", json!({"fare": 88}))
            .await;

        let received = rx.recv().await.unwrap();
        assert_eq!(received["type"], "ride-confirmed");
        assert_eq!(received["data"]["fare"], 88);
    }

    #[tokio::test]
    async fn test_push_to_unbound_handle_is_noop() {
        let notifier = StreamNotifier::new(StreamHub::new());
        let handle = ConnectionHandle::for_rider(RiderId::new());
        // Must not error or panic
        notifier.push(&handle, "ride-ended", json!({})).await;
    }
}
