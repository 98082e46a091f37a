//! Caching infrastructure for the user service: the store contract, the
//! Redis implementation, and cache-key derivation.

mod keys;
mod redis_cache;

pub use keys::CacheKeys;
pub use redis_cache::RedisCache;

use async_trait::async_trait;
use userhub_primitives::error::ApiError;

/// Key-value store with per-key TTL, used as a read-through cache in front
/// of the record store. Calls are independent; no ordering or atomicity is
/// guaranteed across keys.
#[async_trait]
pub trait CacheStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, ApiError>;

    async fn set(&self, key: &str, value: &str, ttl_ms: u64) -> Result<(), ApiError>;

    async fn delete(&self, key: &str) -> Result<(), ApiError>;
}
