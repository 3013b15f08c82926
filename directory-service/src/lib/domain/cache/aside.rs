use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::cache::errors::CacheError;
use crate::domain::cache::ports::CacheStore;

/// Read-through / invalidate-on-write cache wrapper.
///
/// Values round-trip through JSON. The cache is advisory on the read path:
/// backend failures and undecodable payloads count as misses and the value
/// is recomputed from the source of truth. Invalidation failures are
/// propagated instead; a write must not report success while a stale entry
/// may survive.
pub struct CacheAside<C>
where
    C: CacheStore,
{
    store: Arc<C>,
}

impl<C> CacheAside<C>
where
    C: CacheStore,
{
    pub fn new(store: Arc<C>) -> Self {
        Self { store }
    }

    /// Return the cached value under `key`, or compute, cache and return it.
    ///
    /// On a hit the compute function is never invoked. On a miss the
    /// computed value is stored with the given absolute TTL; a failed cache
    /// write is logged and otherwise ignored.
    pub async fn get_or_compute<T, E, F, Fut>(
        &self,
        key: &str,
        ttl: Duration,
        compute: F,
    ) -> Result<T, E>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        match self.store.get(key).await {
            Ok(Some(bytes)) => match serde_json::from_slice(&bytes) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    tracing::warn!(key, error = %e, "Discarding undecodable cache entry");
                }
            },
            Ok(None) => {}
            Err(e) => {
                tracing::warn!(key, error = %e, "Cache read failed, falling back to source");
            }
        }

        let value = compute().await?;

        match serde_json::to_vec(&value) {
            Ok(bytes) => {
                if let Err(e) = self.store.set(key, bytes, ttl).await {
                    tracing::warn!(key, error = %e, "Cache write failed");
                }
            }
            Err(e) => {
                tracing::warn!(key, error = %e, "Cache serialization failed");
            }
        }

        Ok(value)
    }

    /// Remove the entry under `key`.
    ///
    /// # Errors
    /// * `CacheError` - Backend failure; callers must surface this so the
    ///   triggering write does not silently leave a stale entry behind
    pub async fn invalidate(&self, key: &str) -> Result<(), CacheError> {
        self.store.remove(key).await
    }
}

impl<C> Clone for CacheAside<C>
where
    C: CacheStore,
{
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cache::testing::InMemoryCacheStore;

    const TTL: Duration = Duration::from_secs(60);

    #[tokio::test]
    async fn test_miss_computes_and_caches() {
        let store = Arc::new(InMemoryCacheStore::new());
        let cache = CacheAside::new(Arc::clone(&store));

        let value: Vec<String> = cache
            .get_or_compute("key", TTL, || async {
                Ok::<_, CacheError>(vec!["a".to_string()])
            })
            .await
            .unwrap();

        assert_eq!(value, vec!["a".to_string()]);
        assert!(store.contains("key"));
    }

    #[tokio::test]
    async fn test_hit_skips_compute() {
        let store = Arc::new(InMemoryCacheStore::new());
        let cache = CacheAside::new(Arc::clone(&store));

        cache
            .get_or_compute("key", TTL, || async {
                Ok::<_, CacheError>(vec!["cached".to_string()])
            })
            .await
            .unwrap();

        // Second read must come from the cache; a recompute would error out
        let value: Vec<String> = cache
            .get_or_compute("key", TTL, || async {
                Err::<Vec<String>, CacheError>(CacheError::Backend(
                    "compute must not run on a cache hit".to_string(),
                ))
            })
            .await
            .unwrap();

        assert_eq!(value, vec!["cached".to_string()]);
    }

    #[tokio::test]
    async fn test_undecodable_entry_is_a_miss() {
        let store = Arc::new(InMemoryCacheStore::new());
        store.insert_raw("key", b"not json at all".to_vec());
        let cache = CacheAside::new(Arc::clone(&store));

        let value: Vec<String> = cache
            .get_or_compute("key", TTL, || async {
                Ok::<_, CacheError>(vec!["recomputed".to_string()])
            })
            .await
            .unwrap();

        assert_eq!(value, vec!["recomputed".to_string()]);
    }

    #[tokio::test]
    async fn test_invalidate_removes_entry() {
        let store = Arc::new(InMemoryCacheStore::new());
        let cache = CacheAside::new(Arc::clone(&store));

        cache
            .get_or_compute("key", TTL, || async {
                Ok::<_, CacheError>(vec!["a".to_string()])
            })
            .await
            .unwrap();
        assert!(store.contains("key"));

        cache.invalidate("key").await.unwrap();
        assert!(!store.contains("key"));
    }

    #[tokio::test]
    async fn test_backend_read_failure_falls_back_to_source() {
        let store = Arc::new(InMemoryCacheStore::failing());
        let cache = CacheAside::new(store);

        let value: Vec<String> = cache
            .get_or_compute("key", TTL, || async {
                Ok::<_, CacheError>(vec!["from source".to_string()])
            })
            .await
            .unwrap();

        assert_eq!(value, vec!["from source".to_string()]);
    }
}
