mod connection;
mod recording;
mod room;
mod signaling;

pub use connection::ConnectionId;
pub use recording::RecordingMeta;
pub use room::RoomId;
pub use signaling::{ClientMessage, ServerEvent, SignalKind};
