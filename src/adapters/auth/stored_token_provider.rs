//! Token provider backed by the key-value store.
//!
//! The token lives under `access_token`; signing out (or a 401) removes it
//! together with the cached `user` record.

use std::sync::Arc;

use async_trait::async_trait;
use secrecy::Secret;

use crate::ports::{KeyValueStore, TokenProvider, TokenProviderError, ACCESS_TOKEN_KEY, USER_KEY};

/// Reads the bearer token from a `KeyValueStore`.
#[derive(Clone)]
pub struct StoredTokenProvider {
    store: Arc<dyn KeyValueStore>,
}

impl StoredTokenProvider {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Stores a freshly issued token.
    pub async fn store_token(&self, token: &str) -> Result<(), TokenProviderError> {
        self.store.set(ACCESS_TOKEN_KEY, token).await?;
        Ok(())
    }
}

#[async_trait]
impl TokenProvider for StoredTokenProvider {
    async fn access_token(&self) -> Result<Option<Secret<String>>, TokenProviderError> {
        Ok(self
            .store
            .get(ACCESS_TOKEN_KEY)
            .await?
            .filter(|t| !t.trim().is_empty())
            .map(Secret::new))
    }

    async fn invalidate(&self) -> Result<(), TokenProviderError> {
        tracing::debug!("Clearing stored access token and cached user");
        self.store.clear(ACCESS_TOKEN_KEY).await?;
        self.store.clear(USER_KEY).await?;
        Ok(())
    }
}
