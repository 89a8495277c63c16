use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One entry of the uploaded-recordings index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordingMeta {
    /// Filename stem, derived from the upload timestamp.
    pub id: String,
    pub filename: String,
    pub size: u64,
    pub created_at: DateTime<Utc>,
}
