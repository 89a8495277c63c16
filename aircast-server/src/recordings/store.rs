use aircast_core::RecordingMeta;
use chrono::Utc;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::warn;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("recording I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("index encoding failed: {0}")]
    Index(#[from] serde_json::Error),
}

/// On-disk store for uploaded recordings: raw blobs next to a JSON index
/// with the newest entry first.
#[derive(Clone)]
pub struct RecordingStore {
    dir: PathBuf,
    // Serializes read-modify-write cycles on index.json.
    index_lock: Arc<Mutex<()>>,
}

impl RecordingStore {
    /// Opens the store, creating the directory and an empty index if absent.
    pub async fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let store = Self {
            dir: dir.into(),
            index_lock: Arc::new(Mutex::new(())),
        };

        fs::create_dir_all(&store.dir).await?;
        if !fs::try_exists(store.index_path()).await? {
            fs::write(store.index_path(), "[]").await?;
        }

        Ok(store)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn index_path(&self) -> PathBuf {
        self.dir.join("index.json")
    }

    /// Persists one uploaded blob as `<unix-millis>.webm` and prepends its
    /// metadata to the index.
    pub async fn save(&self, data: &[u8]) -> Result<RecordingMeta, StoreError> {
        let created_at = Utc::now();
        let id = created_at.timestamp_millis().to_string();
        let filename = format!("{id}.webm");

        fs::write(self.dir.join(&filename), data).await?;

        let meta = RecordingMeta {
            id,
            filename,
            size: data.len() as u64,
            created_at,
        };

        let _guard = self.index_lock.lock().await;
        let mut list = self.read_index().await;
        list.insert(0, meta.clone());
        fs::write(self.index_path(), serde_json::to_vec_pretty(&list)?).await?;

        Ok(meta)
    }

    /// All recordings, newest first. A missing or corrupt index degrades
    /// to an empty listing rather than an error.
    pub async fn list(&self) -> Vec<RecordingMeta> {
        let _guard = self.index_lock.lock().await;
        self.read_index().await
    }

    async fn read_index(&self) -> Vec<RecordingMeta> {
        match fs::read(self.index_path()).await {
            Ok(bytes) => serde_json::from_slice(&bytes).unwrap_or_else(|e| {
                warn!("Unreadable recording index, serving empty list: {}", e);
                Vec::new()
            }),
            Err(_) => Vec::new(),
        }
    }
}
