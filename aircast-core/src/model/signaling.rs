use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// The three negotiation message kinds the relay forwards. The payload
/// behind each kind is never parsed or validated by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SignalKind {
    Offer,
    Answer,
    IceCandidate,
}

impl fmt::Display for SignalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignalKind::Offer => write!(f, "offer"),
            SignalKind::Answer => write!(f, "answer"),
            SignalKind::IceCandidate => write!(f, "ice-candidate"),
        }
    }
}

/// Inbound frames from a participant, externally tagged as
/// `{"event": …, "data": …}` on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data")]
pub enum ClientMessage {
    /// Declare (or re-declare) this participant's role, e.g. "broadcaster".
    #[serde(rename = "role")]
    Role(String),
    #[serde(rename = "webrtc-offer")]
    Offer(Value),
    #[serde(rename = "webrtc-answer")]
    Answer(Value),
    #[serde(rename = "webrtc-ice")]
    IceCandidate(Value),
}

impl ClientMessage {
    /// Split a negotiation frame into its kind and opaque payload.
    /// Returns `None` for the role announcement.
    pub fn into_signal(self) -> Option<(SignalKind, Value)> {
        match self {
            ClientMessage::Role(_) => None,
            ClientMessage::Offer(payload) => Some((SignalKind::Offer, payload)),
            ClientMessage::Answer(payload) => Some((SignalKind::Answer, payload)),
            ClientMessage::IceCandidate(payload) => Some((SignalKind::IceCandidate, payload)),
        }
    }
}

/// Outbound frames to a participant. Negotiation payloads go out under the
/// same event names they came in on, sender excluded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data")]
pub enum ServerEvent {
    #[serde(rename = "presence")]
    Presence { role: String, count: usize },
    #[serde(rename = "webrtc-offer")]
    Offer(Value),
    #[serde(rename = "webrtc-answer")]
    Answer(Value),
    #[serde(rename = "webrtc-ice")]
    IceCandidate(Value),
    #[serde(rename = "peer-disconnected")]
    PeerDisconnected { role: String },
}

impl ServerEvent {
    /// Wrap a relayed payload back into the outbound frame for its kind.
    pub fn signal(kind: SignalKind, payload: Value) -> Self {
        match kind {
            SignalKind::Offer => ServerEvent::Offer(payload),
            SignalKind::Answer => ServerEvent::Answer(payload),
            SignalKind::IceCandidate => ServerEvent::IceCandidate(payload),
        }
    }
}
