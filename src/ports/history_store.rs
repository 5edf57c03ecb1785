//! History Store Port - Interface for persisting conversation history.
//!
//! This port defines how conversation turns and the active topic are
//! saved and loaded so a session can resume where it left off,
//! supporting both in-memory and file-backed storage.

use async_trait::async_trait;

use crate::domain::dialogue::Topic;
use crate::domain::foundation::ConversationTurn;

/// Errors that can occur during history store operations
#[derive(Debug, thiserror::Error)]
pub enum HistoryStoreError {
    #[error("Failed to serialize history: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize history: {0}")]
    DeserializationFailed(String),

    #[error("IO error: {0}")]
    IoError(String),
}

/// Port for persisting and loading conversation history
#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// Load all persisted turns, oldest first
    ///
    /// # Returns
    /// The stored turns; an empty vector when nothing was persisted
    ///
    /// # Errors
    /// Returns `HistoryStoreError` if the backing store cannot be read
    async fn load_turns(&self) -> Result<Vec<ConversationTurn>, HistoryStoreError>;

    /// Append one turn to the persisted history
    ///
    /// # Errors
    /// Returns `HistoryStoreError` if the write fails
    async fn append_turn(&self, turn: &ConversationTurn) -> Result<(), HistoryStoreError>;

    /// Load the persisted active topic, if any
    ///
    /// # Errors
    /// Returns `HistoryStoreError` if the backing store cannot be read
    async fn load_topic(&self) -> Result<Option<Topic>, HistoryStoreError>;

    /// Save the active topic; `None` clears it
    ///
    /// # Errors
    /// Returns `HistoryStoreError` if the write fails
    async fn save_topic(&self, topic: Option<Topic>) -> Result<(), HistoryStoreError>;

    /// Check whether any history is persisted
    ///
    /// # Returns
    /// `true` if at least one turn is stored
    ///
    /// # Errors
    /// Returns `HistoryStoreError` if the backing store cannot be read
    async fn is_empty(&self) -> Result<bool, HistoryStoreError>;

    /// Delete all persisted turns and the stored topic
    ///
    /// # Errors
    /// Returns `HistoryStoreError` if deletion fails
    async fn clear(&self) -> Result<(), HistoryStoreError>;
}
