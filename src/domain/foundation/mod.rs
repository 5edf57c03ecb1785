//! Foundation module - shared domain primitives.
//!
//! Contains the value objects that form the vocabulary of the
//! Campus Assist domain: speakers, conversation turns, and timestamps.

mod speaker;
mod timestamp;
mod turn;

pub use speaker::Speaker;
pub use timestamp::Timestamp;
pub use turn::{ConversationTurn, Session};
