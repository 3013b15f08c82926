use std::time::Duration;

use async_trait::async_trait;

use crate::domain::cache::errors::CacheError;

/// Raw byte-oriented cache backend.
///
/// Absence is `Ok(None)`; errors are reserved for backend failures.
#[async_trait]
pub trait CacheStore: Send + Sync + 'static {
    /// Fetch the value stored under a key, if any.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError>;

    /// Store a value under a key with an absolute time-to-live.
    async fn set(&self, key: &str, value: Vec<u8>, ttl: Duration) -> Result<(), CacheError>;

    /// Remove the entry stored under a key, if any.
    async fn remove(&self, key: &str) -> Result<(), CacheError>;
}
