pub mod redis;

pub use redis::RedisCacheStore;
