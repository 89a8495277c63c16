use aircast_core::{ConnectionId, ServerEvent};
use aircast_server::EventSink;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, mpsc};

/// Mock EventSink that captures every event a room delivers.
#[derive(Clone)]
pub struct MockEventSink {
    /// Channel mirror of the captured events, for tests that want to await
    /// deliveries one by one.
    tx: mpsc::UnboundedSender<(ConnectionId, ServerEvent)>,
    /// All captured events (for verification).
    events: Arc<Mutex<Vec<(ConnectionId, ServerEvent)>>>,
}

impl MockEventSink {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<(ConnectionId, ServerEvent)>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let sink = Self {
            tx,
            events: Arc::new(Mutex::new(Vec::new())),
        };
        (sink, rx)
    }

    pub async fn events(&self) -> Vec<(ConnectionId, ServerEvent)> {
        self.events.lock().await.clone()
    }

    /// Every event delivered to one specific connection, in delivery order.
    pub async fn events_for(&self, conn: &ConnectionId) -> Vec<ServerEvent> {
        self.events
            .lock()
            .await
            .iter()
            .filter(|(c, _)| c == conn)
            .map(|(_, e)| e.clone())
            .collect()
    }

    /// Block until at least `n` events were captured; panics on timeout.
    pub async fn wait_for_events(&self, n: usize, timeout_ms: u64) {
        let deadline = tokio::time::Instant::now() + Duration::from_millis(timeout_ms);

        loop {
            if self.events.lock().await.len() >= n {
                return;
            }
            if tokio::time::Instant::now() >= deadline {
                panic!("timed out waiting for {} delivered events", n);
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    }
}

#[async_trait]
impl EventSink for MockEventSink {
    async fn deliver(&self, conn: ConnectionId, event: ServerEvent) {
        tracing::debug!("[MockSink] deliver to {}: {:?}", conn, event);

        self.events.lock().await.push((conn, event.clone()));
        let _ = self.tx.send((conn, event));
    }
}
