//! In-Memory History Store Adapter
//!
//! Stores conversation turns and the active topic in memory.
//! Useful for testing and development.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::dialogue::Topic;
use crate::domain::foundation::ConversationTurn;
use crate::ports::{HistoryStore, HistoryStoreError};

/// In-memory storage for conversation history
#[derive(Debug, Clone)]
pub struct InMemoryHistoryStore {
    turns: Arc<RwLock<Vec<ConversationTurn>>>,
    topic: Arc<RwLock<Option<Topic>>>,
}

impl InMemoryHistoryStore {
    /// Create a new in-memory store
    pub fn new() -> Self {
        Self {
            turns: Arc::new(RwLock::new(Vec::new())),
            topic: Arc::new(RwLock::new(None)),
        }
    }

    /// Get the number of stored turns
    pub async fn turn_count(&self) -> usize {
        self.turns.read().await.len()
    }
}

impl Default for InMemoryHistoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HistoryStore for InMemoryHistoryStore {
    async fn load_turns(&self) -> Result<Vec<ConversationTurn>, HistoryStoreError> {
        Ok(self.turns.read().await.clone())
    }

    async fn append_turn(&self, turn: &ConversationTurn) -> Result<(), HistoryStoreError> {
        self.turns.write().await.push(turn.clone());
        Ok(())
    }

    async fn load_topic(&self) -> Result<Option<Topic>, HistoryStoreError> {
        Ok(*self.topic.read().await)
    }

    async fn save_topic(&self, topic: Option<Topic>) -> Result<(), HistoryStoreError> {
        *self.topic.write().await = topic;
        Ok(())
    }

    async fn is_empty(&self) -> Result<bool, HistoryStoreError> {
        Ok(self.turns.read().await.is_empty())
    }

    async fn clear(&self) -> Result<(), HistoryStoreError> {
        self.turns.write().await.clear();
        *self.topic.write().await = None;
        Ok(())
    }
}
