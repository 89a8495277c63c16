pub mod app;
pub mod config;
pub mod recordings;
pub mod room;
pub mod signaling;

pub use app::{AppState, router};
pub use config::Config;
pub use recordings::{RecordingStore, StoreError};
pub use room::{Room, RoomCommand, RoomManager};
pub use signaling::{EventSink, SignalingService, ws_handler};
