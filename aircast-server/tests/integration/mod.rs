pub mod scenario_tests;

use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::Level;

use aircast_core::RoomId;
use aircast_server::{Room, RoomCommand};

use crate::utils::MockEventSink;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_test_writer()
        .try_init();
}

/// Spawn a default room whose deliveries land in a MockEventSink.
pub fn create_test_room() -> (mpsc::Sender<RoomCommand>, MockEventSink) {
    let (cmd_tx, cmd_rx) = mpsc::channel::<RoomCommand>(100);
    let (sink, _event_rx) = MockEventSink::new();

    let room = Room::new(RoomId::default_room(), cmd_rx, Arc::new(sink.clone()));

    tokio::spawn(async move {
        room.run().await;
    });

    (cmd_tx, sink)
}
