use crate::signaling::EventSink;
use aircast_core::{ConnectionId, ServerEvent};
use async_trait::async_trait;
use axum::extract::ws::Message;
use dashmap::DashMap;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, error};

struct SignalingInner {
    conns: DashMap<ConnectionId, mpsc::UnboundedSender<Message>>,
}

/// Table of live WebSocket connections. The room layer only sees it
/// through [`EventSink`]; the handler registers and unregisters entries
/// around each socket's lifetime.
#[derive(Clone)]
pub struct SignalingService {
    inner: Arc<SignalingInner>,
}

impl SignalingService {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(SignalingInner {
                conns: DashMap::new(),
            }),
        }
    }

    pub fn add_conn(&self, conn: ConnectionId, tx: mpsc::UnboundedSender<Message>) {
        self.inner.conns.insert(conn, tx);
    }

    pub fn remove_conn(&self, conn: &ConnectionId) {
        self.inner.conns.remove(conn);
    }

    pub fn send_event(&self, conn: ConnectionId, event: ServerEvent) {
        let Some(peer) = self.inner.conns.get(&conn) else {
            // Recipient raced a disconnect; best-effort delivery skips it.
            debug!("Skipping event for closed connection {}", conn);
            return;
        };

        match serde_json::to_string(&event) {
            Ok(json) => {
                if peer.send(Message::Text(json.into())).is_err() {
                    debug!("Connection {} closed its outbound channel", conn);
                }
            }
            Err(e) => error!("Failed to serialize server event: {}", e),
        }
    }
}

impl Default for SignalingService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EventSink for SignalingService {
    async fn deliver(&self, conn: ConnectionId, event: ServerEvent) {
        self.send_event(conn, event);
    }
}
