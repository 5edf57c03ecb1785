//! Session controller.
//!
//! Drives one chat session end to end: opens it (offering to resume when
//! persisted history exists), routes user input through the dialogue
//! engine, keeps the in-memory transcript, and mirrors the durable parts
//! of the conversation into the history store.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::dialogue::{options_for, responses, DialogueEngine, Topic};
use crate::domain::foundation::{ConversationTurn, Session, Speaker};
use crate::ports::{HistoryStore, HistoryStoreError};

/// Quick-reply label that resumes the persisted conversation.
pub const CONTINUE_LABEL: &str = "Continue previous conversation";

/// Quick-reply label that discards the persisted conversation.
pub const START_NEW_LABEL: &str = "Start new conversation";

/// Bot messages carrying this phrase are menu prompts; they are shown
/// but never persisted, since an equivalent prompt is regenerated the
/// next time the session opens.
const MENU_PROMPT_MARKER: &str = "How can I help";

/// Errors surfaced by session orchestration.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("History store error: {0}")]
    Store(#[from] HistoryStoreError),
}

/// A bot message together with the quick replies to offer next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotPrompt {
    pub text: String,
    pub options: &'static [&'static str],
}

/// What the host should render after a controller call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControllerReply {
    /// A single new bot message.
    Prompt(BotPrompt),
    /// The restored transcript of a resumed conversation.
    Resumed {
        turns: Vec<ConversationTurn>,
        options: &'static [&'static str],
    },
}

/// Orchestrates one chat session over a history store.
pub struct SessionController {
    engine: DialogueEngine,
    store: Arc<dyn HistoryStore>,
    topic: Option<Topic>,
    session: Session,
}

impl SessionController {
    pub fn new(store: Arc<dyn HistoryStore>) -> Self {
        Self {
            engine: DialogueEngine::new(),
            store,
            topic: None,
            session: Session::new(),
        }
    }

    /// The topic currently active in this session.
    pub fn topic(&self) -> Option<Topic> {
        self.topic
    }

    /// The in-memory transcript of this session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Whether any history is persisted, e.g. to decide if a
    /// delete-history control should be offered.
    pub async fn has_history(&self) -> Result<bool, SessionError> {
        Ok(!self.store.is_empty().await?)
    }

    /// Opens the session.
    ///
    /// With persisted history present this offers to resume or restart;
    /// otherwise it greets the user with the main menu.
    pub async fn open(&mut self) -> Result<ControllerReply, SessionError> {
        if self.store.is_empty().await? {
            tracing::debug!("no persisted history, starting fresh");
            return self.welcome().await;
        }

        tracing::debug!("persisted history found, offering to resume");
        // Shown but never persisted; an equivalent prompt is regenerated
        // at every open, so storing it would grow the history on each
        // restart and leak stale prompts into resumed transcripts.
        self.session
            .push(ConversationTurn::bot(responses::CONTINUE_PROMPT));
        Ok(ControllerReply::Prompt(BotPrompt {
            text: responses::CONTINUE_PROMPT.to_string(),
            options: &[CONTINUE_LABEL, START_NEW_LABEL],
        }))
    }

    /// Handles one line of user input.
    ///
    /// Returns `None` for blank input. The resume/restart quick replies
    /// are intercepted here; everything else goes through the dialogue
    /// engine.
    pub async fn handle_input(
        &mut self,
        input: &str,
    ) -> Result<Option<ControllerReply>, SessionError> {
        let message = input.trim();
        if message.is_empty() {
            return Ok(None);
        }

        if message == CONTINUE_LABEL {
            return self.resume().await.map(Some);
        }
        if message == START_NEW_LABEL {
            return self.start_new().await.map(Some);
        }

        self.record_user(message).await?;

        let reply = self.engine.respond(message, self.topic);
        if reply.topic != self.topic {
            tracing::debug!(from = ?self.topic, to = ?reply.topic, "topic changed");
            self.topic = reply.topic;
            self.store.save_topic(self.topic).await?;
        }

        self.record_bot(&reply.text).await?;

        Ok(Some(ControllerReply::Prompt(BotPrompt {
            text: reply.text,
            options: options_for(reply.topic, reply.sub_topic),
        })))
    }

    /// Restores the persisted conversation into this session.
    pub async fn resume(&mut self) -> Result<ControllerReply, SessionError> {
        let turns = self.store.load_turns().await?;
        self.topic = self.store.load_topic().await?;
        self.session = Session::from_turns(turns.clone());

        tracing::info!(turns = turns.len(), topic = ?self.topic, "resumed conversation");
        Ok(ControllerReply::Resumed {
            turns,
            options: options_for(self.topic, None),
        })
    }

    /// Discards all persisted history and greets the user afresh.
    pub async fn start_new(&mut self) -> Result<ControllerReply, SessionError> {
        self.store.clear().await?;
        self.engine.reset();
        self.topic = None;
        self.session = Session::new();

        tracing::info!("started new conversation");
        self.welcome().await
    }

    /// Deletes the persisted history mid-session and confirms it.
    pub async fn delete_history(&mut self) -> Result<ControllerReply, SessionError> {
        self.store.clear().await?;
        self.topic = None;

        tracing::info!("conversation history deleted");
        // Shown but never persisted; the store must stay empty after a delete.
        self.session
            .push(ConversationTurn::bot(responses::HISTORY_CLEARED));
        Ok(ControllerReply::Prompt(BotPrompt {
            text: responses::HISTORY_CLEARED.to_string(),
            options: options_for(None, None),
        }))
    }

    async fn welcome(&mut self) -> Result<ControllerReply, SessionError> {
        self.record_bot(responses::WELCOME).await?;
        Ok(ControllerReply::Prompt(BotPrompt {
            text: responses::WELCOME.to_string(),
            options: options_for(None, None),
        }))
    }

    async fn record_user(&mut self, text: &str) -> Result<(), SessionError> {
        let turn = ConversationTurn::new(Speaker::User, text);
        self.store.append_turn(&turn).await?;
        self.session.push(turn);
        Ok(())
    }

    async fn record_bot(&mut self, text: &str) -> Result<(), SessionError> {
        let turn = ConversationTurn::new(Speaker::Bot, text);
        if !text.contains(MENU_PROMPT_MARKER) {
            self.store.append_turn(&turn).await?;
        }
        self.session.push(turn);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryHistoryStore;
    use crate::domain::dialogue::SubTopic;

    fn controller() -> (SessionController, Arc<InMemoryHistoryStore>) {
        let store = Arc::new(InMemoryHistoryStore::new());
        (SessionController::new(store.clone()), store)
    }

    fn prompt(reply: ControllerReply) -> BotPrompt {
        match reply {
            ControllerReply::Prompt(prompt) => prompt,
            other => panic!("expected a prompt, got {:?}", other),
        }
    }

    mod opening {
        use super::*;

        #[tokio::test]
        async fn fresh_store_gets_the_welcome_and_main_menu() {
            let (mut controller, _store) = controller();
            let prompt = prompt(controller.open().await.unwrap());
            assert_eq!(prompt.text, responses::WELCOME);
            assert_eq!(prompt.options, options_for(None, None));
        }

        #[tokio::test]
        async fn the_welcome_itself_is_not_persisted() {
            let (mut controller, store) = controller();
            controller.open().await.unwrap();
            assert_eq!(store.turn_count().await, 0);
        }

        #[tokio::test]
        async fn existing_history_gets_the_continue_prompt() {
            let (mut controller, store) = controller();
            store
                .append_turn(&ConversationTurn::new(Speaker::User, "fees"))
                .await
                .unwrap();

            let prompt = prompt(controller.open().await.unwrap());
            assert_eq!(prompt.text, responses::CONTINUE_PROMPT);
            assert_eq!(prompt.options, &[CONTINUE_LABEL, START_NEW_LABEL]);
        }

        #[tokio::test]
        async fn the_continue_prompt_is_not_persisted() {
            let (mut controller, store) = controller();
            store
                .append_turn(&ConversationTurn::new(Speaker::User, "fees"))
                .await
                .unwrap();

            // Repeated opens must not grow the stored history.
            controller.open().await.unwrap();
            controller.open().await.unwrap();
            assert_eq!(store.turn_count().await, 1);

            // But the prompt is still part of the visible transcript.
            assert_eq!(
                controller.session().last().unwrap().text(),
                responses::CONTINUE_PROMPT
            );
        }
    }

    mod input {
        use super::*;

        #[tokio::test]
        async fn blank_input_is_ignored() {
            let (mut controller, _store) = controller();
            assert!(controller.handle_input("   ").await.unwrap().is_none());
        }

        #[tokio::test]
        async fn a_topic_utterance_activates_the_topic_and_persists_it() {
            let (mut controller, store) = controller();
            let reply = controller.handle_input("hostel").await.unwrap().unwrap();

            let prompt = prompt(reply);
            assert_eq!(prompt.text, responses::topic_overview(Topic::Hostels));
            assert_eq!(controller.topic(), Some(Topic::Hostels));
            assert_eq!(store.load_topic().await.unwrap(), Some(Topic::Hostels));
        }

        #[tokio::test]
        async fn sub_topic_follow_ups_are_offered_after_a_match() {
            let (mut controller, _store) = controller();
            controller.handle_input("fees").await.unwrap();
            let reply = controller.handle_input("mpesa").await.unwrap().unwrap();
            assert_eq!(
                prompt(reply).options,
                options_for(Some(Topic::Fees), Some(SubTopic::Payment))
            );
        }

        #[tokio::test]
        async fn both_sides_of_the_exchange_are_persisted() {
            let (mut controller, store) = controller();
            controller.handle_input("hostel").await.unwrap();

            let turns = store.load_turns().await.unwrap();
            assert_eq!(turns.len(), 2);
            assert_eq!(turns[0].speaker(), Speaker::User);
            assert_eq!(turns[1].speaker(), Speaker::Bot);
        }

        #[tokio::test]
        async fn going_back_clears_the_persisted_topic() {
            let (mut controller, store) = controller();
            controller.handle_input("fees").await.unwrap();
            controller.handle_input("back").await.unwrap();

            assert_eq!(controller.topic(), None);
            assert_eq!(store.load_topic().await.unwrap(), None);
        }
    }

    mod lifecycle {
        use super::*;

        #[tokio::test]
        async fn resume_restores_turns_and_topic() {
            let (mut controller, store) = controller();
            store
                .append_turn(&ConversationTurn::new(Speaker::User, "hostel"))
                .await
                .unwrap();
            store.save_topic(Some(Topic::Hostels)).await.unwrap();

            let reply = controller.handle_input(CONTINUE_LABEL).await.unwrap().unwrap();
            match reply {
                ControllerReply::Resumed { turns, options } => {
                    assert_eq!(turns.len(), 1);
                    assert_eq!(options, options_for(Some(Topic::Hostels), None));
                }
                other => panic!("expected a resume, got {:?}", other),
            }
            assert_eq!(controller.topic(), Some(Topic::Hostels));
            assert_eq!(controller.session().len(), 1);
        }

        #[tokio::test]
        async fn start_new_clears_the_store_and_greets() {
            let (mut controller, store) = controller();
            controller.handle_input("fees").await.unwrap();
            assert!(controller.has_history().await.unwrap());

            let reply = controller.handle_input(START_NEW_LABEL).await.unwrap().unwrap();
            assert_eq!(prompt(reply).text, responses::WELCOME);
            assert!(!controller.has_history().await.unwrap());
            assert_eq!(controller.topic(), None);
        }

        #[tokio::test]
        async fn rotation_restarts_after_start_new() {
            let (mut controller, _store) = controller();
            controller.handle_input("fees").await.unwrap();
            let first = prompt(controller.handle_input("mpesa").await.unwrap().unwrap());
            controller.handle_input("mpesa").await.unwrap();

            controller.handle_input(START_NEW_LABEL).await.unwrap();
            controller.handle_input("fees").await.unwrap();
            let again = prompt(controller.handle_input("mpesa").await.unwrap().unwrap());
            assert_eq!(first.text, again.text);
        }

        #[tokio::test]
        async fn delete_history_confirms_and_empties_the_store() {
            let (mut controller, store) = controller();
            controller.handle_input("results").await.unwrap();

            let reply = controller.delete_history().await.unwrap();
            assert_eq!(prompt(reply).text, responses::HISTORY_CLEARED);
            assert!(store.is_empty().await.unwrap());
            assert_eq!(store.load_topic().await.unwrap(), None);
        }
    }
}
