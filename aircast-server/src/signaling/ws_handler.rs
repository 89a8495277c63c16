use crate::app::AppState;
use crate::room::RoomCommand;
use aircast_core::{ClientMessage, ConnectionId, RoomId};
use axum::extract::ws::{Message, WebSocket};
use axum::extract::{State, WebSocketUpgrade};
use axum::response::IntoResponse;
use futures::{SinkExt, StreamExt};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{error, info, warn};

pub async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let conn = ConnectionId::new();

    ws.on_upgrade(move |socket| handle_socket(socket, conn, state))
}

async fn handle_socket(socket: WebSocket, conn: ConnectionId, state: Arc<AppState>) {
    info!("New WebSocket connection: {}", conn);

    let room_tx = state.rooms.room_sender(&RoomId::default_room());
    let (mut sender, mut receiver) = socket.split();
    let (tx, mut rx) = mpsc::unbounded_channel();

    state.signaling.add_conn(conn, tx);

    let mut send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(msg).await.is_err() {
                break;
            }
        }
    });

    let mut recv_task = tokio::spawn({
        let room_tx = room_tx.clone();

        async move {
            while let Some(Ok(msg)) = receiver.next().await {
                match msg {
                    Message::Text(text) => match serde_json::from_str::<ClientMessage>(&text) {
                        Ok(ClientMessage::Role(role)) => {
                            if let Err(e) = room_tx.send(RoomCommand::Announce { conn, role }).await
                            {
                                error!("Room died: {}", e);
                                break;
                            }
                        }
                        Ok(signal) => {
                            // Negotiation blobs pass through uninterpreted.
                            if let Some((kind, payload)) = signal.into_signal() {
                                let _ = room_tx
                                    .send(RoomCommand::Relay {
                                        conn,
                                        kind,
                                        payload,
                                    })
                                    .await;
                            }
                        }
                        Err(e) => warn!("Invalid frame from {}: {:?}", conn, e),
                    },
                    Message::Close(_) => break,
                    _ => {}
                }
            }
        }
    });

    tokio::select! {
        _ = (&mut send_task) => recv_task.abort(),
        _ = (&mut recv_task) => send_task.abort(),
    };

    // Exactly one disconnect per socket, whichever half closed first.
    let _ = room_tx.send(RoomCommand::Disconnect { conn }).await;
    state.signaling.remove_conn(&conn);

    info!("WebSocket disconnected: {}", conn);
}
