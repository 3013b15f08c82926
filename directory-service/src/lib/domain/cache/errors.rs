use thiserror::Error;

/// Error for cache backend operations
#[derive(Debug, Clone, Error)]
pub enum CacheError {
    #[error("Cache backend error: {0}")]
    Backend(String),
}
