//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `auth` - Token provider backed by the key-value store
//! - `http` - Backend API client (question source and submission sink)
//! - `questions` - Question record format and the YAML fixture source
//! - `storage` - Key-value stores (in-memory, JSON file)

pub mod auth;
pub mod http;
pub mod questions;
pub mod storage;

pub use auth::StoredTokenProvider;
pub use http::{ApiClientConfig, HttpApiClient};
pub use questions::YamlQuestionSource;
pub use storage::{FileKeyValueStore, InMemoryKeyValueStore};
