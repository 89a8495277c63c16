use aircast_core::{ConnectionId, ServerEvent};
use async_trait::async_trait;

/// Outbound side of the signaling surface, implemented by the WebSocket
/// layer so rooms can push events to individual connections.
#[async_trait]
pub trait EventSink: Send + Sync {
    /// Deliver one event to one connection. Best-effort: a connection that
    /// already closed is skipped, never an error.
    async fn deliver(&self, conn: ConnectionId, event: ServerEvent);
}
