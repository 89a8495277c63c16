use aircast_core::{ConnectionId, SignalKind};
use serde_json::Value;

/// Commands flowing into a room from the signaling surface (WebSocket).
#[derive(Debug)]
pub enum RoomCommand {
    /// Participant declared (or re-declared) its role and joins the room.
    Announce { conn: ConnectionId, role: String },

    /// A negotiation blob to fan out to every member except the sender.
    Relay {
        conn: ConnectionId,
        kind: SignalKind,
        payload: Value,
    },

    /// The participant's transport closed.
    Disconnect { conn: ConnectionId },
}
