//! Storage Adapters
//!
//! Implementations of the HistoryStore port for persisting conversation
//! history.
//!
//! ## Available Adapters
//!
//! - **JsonFileHistoryStore** - Stores history as a JSON file on disk
//! - **InMemoryHistoryStore** - Stores history in memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{JsonFileHistoryStore, InMemoryHistoryStore};
//!
//! // Production: file-based storage
//! let store = JsonFileHistoryStore::new("./data/history.json");
//!
//! // Testing: in-memory storage
//! let store = InMemoryHistoryStore::new();
//! ```

mod in_memory_history_store;
mod json_file_history_store;

pub use in_memory_history_store::InMemoryHistoryStore;
pub use json_file_history_store::JsonFileHistoryStore;
