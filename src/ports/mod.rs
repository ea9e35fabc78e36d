//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `QuestionSource` - Ordered questionnaire questions
//! - `SubmissionSink` - Receives completed answers, returns a scoring verdict
//! - `TokenProvider` - Bearer token for authenticated requests
//! - `KeyValueStore` - Persisted client state (token, cached user)

mod key_value_store;
mod question_source;
mod submission_sink;
mod token_provider;

pub use key_value_store::{KeyValueStore, KeyValueStoreError, ACCESS_TOKEN_KEY, USER_KEY};
pub use question_source::{QuestionSource, QuestionSourceError};
pub use submission_sink::{RemoteAggregation, SubmissionError, SubmissionSink};
pub use token_provider::{TokenProvider, TokenProviderError};
