use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::cache::errors::CacheError;
use crate::domain::cache::ports::CacheStore;

/// In-memory cache store for unit tests.
///
/// TTLs are accepted and ignored; tests assert on presence, not expiry.
pub(crate) struct InMemoryCacheStore {
    entries: Mutex<HashMap<String, Vec<u8>>>,
    failing: bool,
}

impl InMemoryCacheStore {
    pub(crate) fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            failing: false,
        }
    }

    /// A store whose every operation fails, for advisory-cache tests.
    pub(crate) fn failing() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            failing: true,
        }
    }

    pub(crate) fn contains(&self, key: &str) -> bool {
        self.entries.lock().unwrap().contains_key(key)
    }

    pub(crate) fn insert_raw(&self, key: &str, value: Vec<u8>) {
        self.entries.lock().unwrap().insert(key.to_string(), value);
    }
}

#[async_trait]
impl CacheStore for InMemoryCacheStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        if self.failing {
            return Err(CacheError::Backend("store offline".to_string()));
        }
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    async fn set(&self, key: &str, value: Vec<u8>, _ttl: Duration) -> Result<(), CacheError> {
        if self.failing {
            return Err(CacheError::Backend("store offline".to_string()));
        }
        self.entries.lock().unwrap().insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), CacheError> {
        if self.failing {
            return Err(CacheError::Backend("store offline".to_string()));
        }
        self.entries.lock().unwrap().remove(key);
        Ok(())
    }
}
