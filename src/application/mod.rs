//! Application layer - Session orchestration.
//!
//! Coordinates the dialogue engine, the conversation session, and the
//! history store into the flows a host UI drives: opening a session,
//! handling input, resuming or restarting a conversation, and deleting
//! history.

mod controller;

pub use controller::{
    BotPrompt, ControllerReply, SessionController, SessionError, CONTINUE_LABEL, START_NEW_LABEL,
};
