//! Key-Value Store Port - small persisted client state.
//!
//! Holds the bearer token and the cached user record between runs. Passed
//! explicitly to whatever needs it; there is no global store.

use async_trait::async_trait;

/// Key under which the bearer token is stored.
pub const ACCESS_TOKEN_KEY: &str = "access_token";

/// Key under which the cached user record (JSON) is stored.
pub const USER_KEY: &str = "user";

/// Errors that can occur during key-value operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeyValueStoreError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Failed to serialize store: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize store: {0}")]
    DeserializationFailed(String),
}

/// Port for string key-value persistence.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Returns the value for `key`, or `None` if unset.
    async fn get(&self, key: &str) -> Result<Option<String>, KeyValueStoreError>;

    /// Sets `key` to `value`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<(), KeyValueStoreError>;

    /// Removes `key`. Removing a missing key is not an error.
    async fn clear(&self, key: &str) -> Result<(), KeyValueStoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_includes_cause() {
        let err = KeyValueStoreError::IoError("permission denied".to_string());
        assert_eq!(err.to_string(), "IO error: permission denied");
    }
}
