use crate::room::{Room, RoomCommand};
use crate::signaling::EventSink;
use aircast_core::RoomId;
use dashmap::DashMap;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::info;

/// Registry of live rooms, keyed by name. Rooms are spawned lazily the
/// first time someone asks for them; today only the default room exists.
#[derive(Clone)]
pub struct RoomManager {
    rooms: Arc<DashMap<RoomId, mpsc::Sender<RoomCommand>>>,
    sink: Arc<dyn EventSink>,
}

impl RoomManager {
    pub fn new(sink: Arc<dyn EventSink>) -> Self {
        Self {
            rooms: Arc::new(DashMap::new()),
            sink,
        }
    }

    pub fn room_sender(&self, room_id: &RoomId) -> mpsc::Sender<RoomCommand> {
        if let Some(sender) = self.rooms.get(room_id) {
            return sender.clone();
        }

        info!("Creating new room: {}", room_id);
        let (tx, rx) = mpsc::channel(100);

        let room = Room::new(room_id.clone(), rx, self.sink.clone());
        tokio::spawn(room.run());

        self.rooms.insert(room_id.clone(), tx.clone());
        tx
    }
}
