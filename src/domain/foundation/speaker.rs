//! Speaker role for conversation turns.

use serde::{Deserialize, Serialize};

/// Who produced a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Speaker {
    /// The student typing into the chat.
    User,
    /// The assistant.
    Bot,
}

impl Speaker {
    /// Returns a short label suitable for transcript display.
    pub fn label(&self) -> &'static str {
        match self {
            Self::User => "You",
            Self::Bot => "Assistant",
        }
    }
}
