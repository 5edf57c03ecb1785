//! Conversation turn entity and the transient session transcript.
//!
//! Turns are immutable records of one message exchanged in the chat.
//! An ordered sequence of turns forms a `Session` - the transcript of
//! the currently open conversation, distinct from the longer-lived
//! persisted history owned by the storage adapter.

use serde::{Deserialize, Serialize};

use super::{Speaker, Timestamp};

/// An immutable (speaker, text) pair representing one message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    speaker: Speaker,
    text: String,
    created_at: Timestamp,
}

impl ConversationTurn {
    /// Creates a new turn, stamped with the current time.
    pub fn new(speaker: Speaker, text: impl Into<String>) -> Self {
        Self {
            speaker,
            text: text.into(),
            created_at: Timestamp::now(),
        }
    }

    /// Creates a user turn.
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Speaker::User, text)
    }

    /// Creates a bot turn.
    pub fn bot(text: impl Into<String>) -> Self {
        Self::new(Speaker::Bot, text)
    }

    /// Returns the speaker of this turn.
    pub fn speaker(&self) -> Speaker {
        self.speaker
    }

    /// Returns the message text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns when the turn was recorded.
    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }
}

/// Ordered transcript of the currently open conversation.
///
/// Discarded when the host starts a brand-new conversation.
#[derive(Debug, Clone, Default)]
pub struct Session {
    turns: Vec<ConversationTurn>,
}

impl Session {
    /// Creates an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session from previously persisted turns.
    pub fn from_turns(turns: Vec<ConversationTurn>) -> Self {
        Self { turns }
    }

    /// Appends a turn to the transcript.
    pub fn push(&mut self, turn: ConversationTurn) {
        self.turns.push(turn);
    }

    /// Returns the turns in order.
    pub fn turns(&self) -> &[ConversationTurn] {
        &self.turns
    }

    /// Returns the most recent turn, if any.
    pub fn last(&self) -> Option<&ConversationTurn> {
        self.turns.last()
    }

    /// Returns the number of turns.
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// Returns true if no turns have been recorded.
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Discards all turns.
    pub fn clear(&mut self) {
        self.turns.clear();
    }
}
