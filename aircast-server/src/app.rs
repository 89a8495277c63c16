use crate::config::Config;
use crate::recordings::{RecordingStore, list_recordings, upload_recording};
use crate::room::RoomManager;
use crate::signaling::{SignalingService, ws_handler};
use axum::Router;
use axum::routing::{get, post};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

/// Everything the HTTP/WebSocket handlers share.
pub struct AppState {
    pub signaling: SignalingService,
    pub rooms: RoomManager,
    pub store: RecordingStore,
    pub config: Config,
}

pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/ws", get(ws_handler))
        .route("/api/upload", post(upload_recording))
        .route("/api/recordings", get(list_recordings))
        .nest_service("/recordings", ServeDir::new(state.store.dir()))
        .layer(cors)
        .with_state(state)
}
