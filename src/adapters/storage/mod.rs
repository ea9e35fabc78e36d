//! Storage Adapters
//!
//! Implementations of the KeyValueStore port for persisting client state.
//!
//! ## Available Adapters
//!
//! - **FileKeyValueStore** - Stores entries as one JSON object on disk
//! - **InMemoryKeyValueStore** - Stores entries in memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FileKeyValueStore, InMemoryKeyValueStore};
//!
//! // Production: file-based storage
//! let store = FileKeyValueStore::new("./data/client_state.json");
//!
//! // Testing: in-memory storage
//! let store = InMemoryKeyValueStore::new();
//! ```

mod file_key_value_store;
mod in_memory_key_value_store;

pub use file_key_value_store::FileKeyValueStore;
pub use in_memory_key_value_store::InMemoryKeyValueStore;
