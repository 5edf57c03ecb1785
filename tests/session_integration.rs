//! Integration tests for the full session flow.
//!
//! These tests drive the session controller end to end:
//! 1. A first session chats, navigates into a topic, and persists turns
//! 2. A second session over the same store offers to resume
//! 3. Resuming restores the transcript and the active topic
//! 4. Starting anew or deleting history empties the store
//!
//! The file-backed store is exercised through a temp directory; the rest
//! runs over the in-memory store.

use std::sync::Arc;

use tempfile::TempDir;

use campus_assist::adapters::storage::{InMemoryHistoryStore, JsonFileHistoryStore};
use campus_assist::application::{
    BotPrompt, ControllerReply, SessionController, CONTINUE_LABEL, START_NEW_LABEL,
};
use campus_assist::domain::dialogue::{responses, Topic};
use campus_assist::domain::foundation::Speaker;
use campus_assist::ports::HistoryStore;

fn prompt(reply: ControllerReply) -> BotPrompt {
    match reply {
        ControllerReply::Prompt(prompt) => prompt,
        other => panic!("expected a prompt, got {:?}", other),
    }
}

#[tokio::test]
async fn a_full_first_conversation_round_trip() {
    let store = Arc::new(InMemoryHistoryStore::new());
    let mut session = SessionController::new(store.clone());

    let opening = prompt(session.open().await.unwrap());
    assert_eq!(opening.text, responses::WELCOME);
    assert!(opening.options.contains(&"Fees Information"));

    // Pick a topic from the menu, then drill into a sub-topic.
    let overview = prompt(session.handle_input("Fees Information").await.unwrap().unwrap());
    assert_eq!(overview.text, responses::topic_overview(Topic::Fees));

    let answer = prompt(session.handle_input("how do I pay with mpesa?").await.unwrap().unwrap());
    assert!(answer.text.contains("Paybill"));
    assert!(answer.options.contains(&"Back to fees"));

    // Gratitude keeps the topic; going back drops it.
    prompt(session.handle_input("thanks!").await.unwrap().unwrap());
    assert_eq!(session.topic(), Some(Topic::Fees));

    let back = prompt(session.handle_input("back").await.unwrap().unwrap());
    assert_eq!(back.text, responses::RETURN_TO_MENU);
    assert_eq!(session.topic(), None);

    // Everything except menu prompts ended up in the store.
    let turns = store.load_turns().await.unwrap();
    assert!(turns.iter().any(|t| t.speaker() == Speaker::User && t.text() == "thanks!"));
    assert!(!turns.iter().any(|t| t.text() == responses::WELCOME));
}

#[tokio::test]
async fn a_second_session_resumes_where_the_first_left_off() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("history.json");

    {
        let store = Arc::new(JsonFileHistoryStore::new(&path));
        let mut session = SessionController::new(store);
        session.open().await.unwrap();
        session.handle_input("hostel").await.unwrap();
        session.handle_input("what are the rules?").await.unwrap();
    }

    let store = Arc::new(JsonFileHistoryStore::new(&path));
    let mut session = SessionController::new(store);

    let opening = prompt(session.open().await.unwrap());
    assert_eq!(opening.text, responses::CONTINUE_PROMPT);
    assert_eq!(opening.options, &[CONTINUE_LABEL, START_NEW_LABEL]);

    match session.handle_input(CONTINUE_LABEL).await.unwrap().unwrap() {
        ControllerReply::Resumed { turns, options } => {
            assert_eq!(turns.len(), 4);
            assert_eq!(turns[0].text(), "hostel");
            // Back in the Hostels topic, so its menu is offered.
            assert!(options.contains(&"Back to main"));
        }
        other => panic!("expected a resume, got {:?}", other),
    }
    assert_eq!(session.topic(), Some(Topic::Hostels));

    // The restored topic still scopes matching.
    let reply = prompt(session.handle_input("fee").await.unwrap().unwrap());
    assert!(reply.text.contains("Ksh"));
}

#[tokio::test]
async fn starting_new_discards_the_previous_conversation() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("history.json");

    {
        let store = Arc::new(JsonFileHistoryStore::new(&path));
        let mut session = SessionController::new(store);
        session.open().await.unwrap();
        session.handle_input("results").await.unwrap();
    }

    let store = Arc::new(JsonFileHistoryStore::new(&path));
    let mut session = SessionController::new(store.clone());
    session.open().await.unwrap();

    let fresh = prompt(session.handle_input(START_NEW_LABEL).await.unwrap().unwrap());
    assert_eq!(fresh.text, responses::WELCOME);
    assert!(store.is_empty().await.unwrap());
    assert_eq!(store.load_topic().await.unwrap(), None);
    assert!(!path.exists());
}

#[tokio::test]
async fn deleting_history_mid_session_keeps_the_chat_going() {
    let store = Arc::new(InMemoryHistoryStore::new());
    let mut session = SessionController::new(store.clone());
    session.open().await.unwrap();
    session.handle_input("admin").await.unwrap();

    let cleared = prompt(session.delete_history().await.unwrap());
    assert_eq!(cleared.text, responses::HISTORY_CLEARED);
    assert!(store.is_empty().await.unwrap());

    // Chat continues from the main menu.
    let reply = prompt(session.handle_input("general info").await.unwrap().unwrap());
    assert_eq!(session.topic(), Some(Topic::General));
    assert_eq!(reply.text, responses::topic_overview(Topic::General));
}

#[tokio::test]
async fn repeated_questions_cycle_answers_within_one_session() {
    let store = Arc::new(InMemoryHistoryStore::new());
    let mut session = SessionController::new(store);
    session.open().await.unwrap();
    session.handle_input("fees").await.unwrap();

    let first = prompt(session.handle_input("deadline?").await.unwrap().unwrap());
    let second = prompt(session.handle_input("deadline?").await.unwrap().unwrap());
    let third = prompt(session.handle_input("deadline?").await.unwrap().unwrap());
    let fourth = prompt(session.handle_input("deadline?").await.unwrap().unwrap());

    assert_ne!(first.text, second.text);
    assert_ne!(second.text, third.text);
    assert_eq!(first.text, fourth.text);
}
