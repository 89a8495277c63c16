use crate::room::room_command::RoomCommand;
use crate::signaling::EventSink;
use aircast_core::{ConnectionId, RoomId, ServerEvent, SignalKind};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// Per-member state, owned exclusively by the room. The role is whatever
/// string the participant last announced.
struct Member {
    role: String,
}

/// One room, run as its own task. Commands are processed one at a time to
/// completion, so the member set needs no locking and a sender's messages
/// reach recipients in the order they were received.
pub struct Room {
    id: RoomId,
    members: HashMap<ConnectionId, Member>,
    command_rx: mpsc::Receiver<RoomCommand>,
    sink: Arc<dyn EventSink>,
}

impl Room {
    pub fn new(id: RoomId, command_rx: mpsc::Receiver<RoomCommand>, sink: Arc<dyn EventSink>) -> Self {
        Self {
            id,
            members: HashMap::new(),
            command_rx,
            sink,
        }
    }

    pub async fn run(mut self) {
        info!("Room '{}' event loop started", self.id);

        while let Some(cmd) = self.command_rx.recv().await {
            self.handle_command(cmd).await;
        }

        info!("Room '{}' event loop finished", self.id);
    }

    async fn handle_command(&mut self, cmd: RoomCommand) {
        match cmd {
            RoomCommand::Announce { conn, role } => self.announce(conn, role).await,
            RoomCommand::Relay { conn, kind, payload } => self.relay(conn, kind, payload).await,
            RoomCommand::Disconnect { conn } => self.disconnect(conn).await,
        }
    }

    /// Sets the connection's role and joins it to the room. Re-announcing
    /// just overwrites the role; membership is never duplicated. Every
    /// member, the announcer included, gets a fresh presence event.
    async fn announce(&mut self, conn: ConnectionId, role: String) {
        info!("Connection {} announced role '{}' in '{}'", conn, role, self.id);

        self.members.insert(conn, Member { role: role.clone() });

        let count = self.members.len();
        self.broadcast(ServerEvent::Presence { role, count }).await;
    }

    /// Forwards the opaque payload, under the same kind, to every member
    /// except the sender. Best-effort: recipients that vanished between
    /// lookup and send are skipped by the sink.
    async fn relay(&self, conn: ConnectionId, kind: SignalKind, payload: Value) {
        debug!("Relaying {} from {} in '{}'", kind, conn, self.id);

        for target in self.members.keys() {
            if *target != conn {
                self.sink
                    .deliver(*target, ServerEvent::signal(kind, payload.clone()))
                    .await;
            }
        }
    }

    /// Drops the connection from the member set and tells the remaining
    /// members who left. Fires for every closed transport, so a connection
    /// that never announced reports the "unknown" role.
    async fn disconnect(&mut self, conn: ConnectionId) {
        let role = self
            .members
            .remove(&conn)
            .map(|m| m.role)
            .unwrap_or_else(|| "unknown".to_string());

        info!("Connection {} ({}) left '{}'", conn, role, self.id);

        self.broadcast(ServerEvent::PeerDisconnected { role }).await;
    }

    async fn broadcast(&self, event: ServerEvent) {
        for conn in self.members.keys() {
            self.sink.deliver(*conn, event.clone()).await;
        }
    }
}
