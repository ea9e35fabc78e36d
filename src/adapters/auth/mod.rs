//! Authentication adapters.

mod stored_token_provider;

pub use stored_token_provider::StoredTokenProvider;
