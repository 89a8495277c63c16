use aircast_server::{AppState, Config, RecordingStore, RoomManager, SignalingService, router};
use anyhow::Context;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();

    let store = RecordingStore::open(&config.recordings_dir)
        .await
        .context("failed to open recording store")?;

    let signaling = SignalingService::new();
    let rooms = RoomManager::new(Arc::new(signaling.clone()));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));

    let state = Arc::new(AppState {
        signaling,
        rooms,
        store,
        config,
    });

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    info!("Server running on port {}", addr.port());

    axum::serve(listener, router(state))
        .await
        .context("server exited")?;

    Ok(())
}
