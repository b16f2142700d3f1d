//! Message log storage backends.

use crate::error::StoreError;
use crate::types::MessageRecord;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tokio::sync::{Mutex, RwLock};
use tracing::debug;

/// JSON-file-backed message log.
///
/// The whole collection is read and rewritten on every append. A
/// single-writer lock serializes appends so two concurrent read-modify-write
/// cycles cannot drop each other's record, and the rewrite goes through a
/// temp file + rename so a crash mid-write leaves the previous state intact.
///
/// A missing or malformed file is an error on both operations; the store
/// never creates or repairs the file.
pub struct JsonFileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    /// Create a store over the given log file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check if the backing file exists.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    async fn read_all(&self) -> Result<Vec<MessageRecord>, StoreError> {
        let data = fs::read(&self.path).await.map_err(StoreError::Read)?;
        Ok(serde_json::from_slice(&data)?)
    }

    /// List all records, newest first.
    pub async fn list(&self) -> Result<Vec<MessageRecord>, StoreError> {
        let mut records = self.read_all().await?;
        records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(records)
    }

    /// Append a record to the end of the log.
    pub async fn append(&self, record: MessageRecord) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;

        let mut records = self.read_all().await?;
        records.push(record);

        let data = serde_json::to_vec_pretty(&records)?;

        let temp_path = self.path.with_extension("tmp");
        fs::write(&temp_path, &data)
            .await
            .map_err(StoreError::Write)?;
        fs::rename(&temp_path, &self.path)
            .await
            .map_err(StoreError::Write)?;

        debug!(records = records.len(), path = ?self.path, "Message log rewritten");
        Ok(())
    }
}

/// In-memory message log for tests or when persistence is disabled.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Arc<RwLock<Vec<MessageRecord>>>,
}

impl MemoryStore {
    /// Create an empty in-memory log.
    pub fn new() -> Self {
        Self::default()
    }

    /// List all records, newest first.
    pub async fn list(&self) -> Result<Vec<MessageRecord>, StoreError> {
        let mut records = self.records.read().await.clone();
        records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(records)
    }

    /// Append a record to the end of the log.
    pub async fn append(&self, record: MessageRecord) -> Result<(), StoreError> {
        self.records.write().await.push(record);
        Ok(())
    }
}

/// Message log backend.
pub enum Store {
    /// JSON file on disk
    File(JsonFileStore),
    /// In-memory only (no persistence)
    Memory(MemoryStore),
}

impl Store {
    /// Create a file-backed store.
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Store::File(JsonFileStore::new(path))
    }

    /// Create an in-memory store.
    pub fn memory() -> Self {
        Store::Memory(MemoryStore::new())
    }

    /// List all records, newest first.
    pub async fn list(&self) -> Result<Vec<MessageRecord>, StoreError> {
        match self {
            Store::File(s) => s.list().await,
            Store::Memory(s) => s.list().await,
        }
    }

    /// Append a record to the end of the log.
    pub async fn append(&self, record: MessageRecord) -> Result<(), StoreError> {
        match self {
            Store::File(s) => s.append(record).await,
            Store::Memory(s) => s.append(record).await,
        }
    }
}
