use aircast_core::{ConnectionId, ServerEvent, SignalKind};
use aircast_server::RoomCommand;
use serde_json::json;

use crate::integration::{create_test_room, init_tracing};

/// Walks the whole broadcaster/listener session: join, offer, leave.
#[tokio::test]
async fn broadcaster_and_listener_session() {
    init_tracing();

    let (room_tx, sink) = create_test_room();
    let broadcaster = ConnectionId::new();
    let listener = ConnectionId::new();

    room_tx
        .send(RoomCommand::Announce {
            conn: broadcaster,
            role: "broadcaster".to_string(),
        })
        .await
        .expect("room alive");

    sink.wait_for_events(1, 1000).await;
    assert_eq!(
        sink.events_for(&broadcaster).await,
        vec![ServerEvent::Presence {
            role: "broadcaster".to_string(),
            count: 1
        }]
    );

    room_tx
        .send(RoomCommand::Announce {
            conn: listener,
            role: "listener".to_string(),
        })
        .await
        .expect("room alive");

    sink.wait_for_events(3, 1000).await;
    let joined = ServerEvent::Presence {
        role: "listener".to_string(),
        count: 2,
    };
    assert_eq!(sink.events_for(&broadcaster).await.last(), Some(&joined));
    assert_eq!(sink.events_for(&listener).await, vec![joined]);

    // The offer reaches the listener byte-for-byte; the broadcaster hears
    // nothing back.
    let sdp = json!({"sdp": "v=0..."});
    room_tx
        .send(RoomCommand::Relay {
            conn: broadcaster,
            kind: SignalKind::Offer,
            payload: sdp.clone(),
        })
        .await
        .expect("room alive");

    sink.wait_for_events(4, 1000).await;
    assert_eq!(
        sink.events_for(&listener).await.last(),
        Some(&ServerEvent::Offer(sdp))
    );
    assert_eq!(sink.events_for(&broadcaster).await.len(), 2);

    room_tx
        .send(RoomCommand::Disconnect { conn: listener })
        .await
        .expect("room alive");

    sink.wait_for_events(5, 1000).await;
    assert_eq!(
        sink.events_for(&broadcaster).await.last(),
        Some(&ServerEvent::PeerDisconnected {
            role: "listener".to_string()
        })
    );

    // Re-announcing shows occupancy is back to one.
    room_tx
        .send(RoomCommand::Announce {
            conn: broadcaster,
            role: "broadcaster".to_string(),
        })
        .await
        .expect("room alive");

    sink.wait_for_events(6, 1000).await;
    assert_eq!(
        sink.events_for(&broadcaster).await.last(),
        Some(&ServerEvent::Presence {
            role: "broadcaster".to_string(),
            count: 1
        })
    );
}
