use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of a room. The deployed server only ever uses [`RoomId::default_room`],
/// but rooms are keyed by name so the registry generalizes to many.
#[derive(Debug, Serialize, Deserialize, Clone, Hash, Eq, PartialEq)]
pub struct RoomId(pub String);

impl RoomId {
    /// The single well-known room every participant joins.
    pub fn default_room() -> Self {
        Self("default-room".to_string())
    }
}

impl From<&str> for RoomId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
