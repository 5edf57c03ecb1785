//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `HistoryStore` - Port for persisting conversation history and topic

mod history_store;

pub use history_store::{HistoryStore, HistoryStoreError};
