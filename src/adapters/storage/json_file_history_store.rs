//! File-based History Store Adapter
//!
//! Stores the full conversation history and the active topic as a single
//! JSON document on disk. Every mutation rewrites the file; history sizes
//! here are small enough that this stays cheap.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::dialogue::Topic;
use crate::domain::foundation::ConversationTurn;
use crate::ports::{HistoryStore, HistoryStoreError};

/// On-disk document layout.
#[derive(Debug, Default, Serialize, Deserialize)]
struct PersistedHistory {
    turns: Vec<ConversationTurn>,
    topic: Option<Topic>,
}

/// File-based storage for conversation history
#[derive(Debug, Clone)]
pub struct JsonFileHistoryStore {
    path: PathBuf,
}

impl JsonFileHistoryStore {
    /// Create a new file store backed by the given JSON file
    ///
    /// # Arguments
    /// * `path` - The file the history document is written to
    ///
    /// # Example
    /// ```ignore
    /// let store = JsonFileHistoryStore::new("./data/history.json");
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// The file this store reads and writes
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_document(&self) -> Result<PersistedHistory, HistoryStoreError> {
        if !self.path.exists() {
            return Ok(PersistedHistory::default());
        }

        let json = fs::read_to_string(&self.path)
            .await
            .map_err(|e| HistoryStoreError::IoError(e.to_string()))?;

        serde_json::from_str(&json)
            .map_err(|e| HistoryStoreError::DeserializationFailed(e.to_string()))
    }

    async fn write_document(&self, doc: &PersistedHistory) -> Result<(), HistoryStoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| HistoryStoreError::IoError(e.to_string()))?;
        }

        let json = serde_json::to_string_pretty(doc)
            .map_err(|e| HistoryStoreError::SerializationFailed(e.to_string()))?;

        fs::write(&self.path, json)
            .await
            .map_err(|e| HistoryStoreError::IoError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl HistoryStore for JsonFileHistoryStore {
    async fn load_turns(&self) -> Result<Vec<ConversationTurn>, HistoryStoreError> {
        Ok(self.read_document().await?.turns)
    }

    async fn append_turn(&self, turn: &ConversationTurn) -> Result<(), HistoryStoreError> {
        let mut doc = self.read_document().await?;
        doc.turns.push(turn.clone());
        self.write_document(&doc).await
    }

    async fn load_topic(&self) -> Result<Option<Topic>, HistoryStoreError> {
        Ok(self.read_document().await?.topic)
    }

    async fn save_topic(&self, topic: Option<Topic>) -> Result<(), HistoryStoreError> {
        let mut doc = self.read_document().await?;
        doc.topic = topic;
        self.write_document(&doc).await
    }

    async fn is_empty(&self) -> Result<bool, HistoryStoreError> {
        Ok(self.read_document().await?.turns.is_empty())
    }

    async fn clear(&self) -> Result<(), HistoryStoreError> {
        if !self.path.exists() {
            return Ok(());
        }
        fs::remove_file(&self.path)
            .await
            .map_err(|e| HistoryStoreError::IoError(e.to_string()))
    }
}
