//! Token Provider Port - bearer token for authenticated requests.

use async_trait::async_trait;
use secrecy::Secret;

use super::KeyValueStoreError;

/// Errors that can occur while reading or clearing the token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenProviderError {
    #[error("Token storage failed: {0}")]
    Storage(#[from] KeyValueStoreError),
}

/// Supplies the bearer token attached to outgoing requests.
///
/// # Contract
///
/// - `access_token` returns `Ok(None)` when the user is not signed in
/// - `invalidate` forgets the token and any cached user; called on 401
#[async_trait]
pub trait TokenProvider: Send + Sync {
    async fn access_token(&self) -> Result<Option<Secret<String>>, TokenProviderError>;

    async fn invalidate(&self) -> Result<(), TokenProviderError>;
}
