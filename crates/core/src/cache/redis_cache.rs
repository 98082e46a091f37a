use async_trait::async_trait;
use fred::clients::RedisPool;
use fred::interfaces::KeysInterface;
use fred::types::Expiration;
use std::sync::Arc;
use tracing::error;

use userhub_primitives::error::ApiError;

use super::CacheStore;

/// Redis-backed cache store. Values are opaque strings; expiry uses `PX`
/// so the configured TTL keeps millisecond precision.
#[derive(Clone)]
pub struct RedisCache {
    pool: Arc<RedisPool>,
}

impl RedisCache {
    pub fn new(pool: Arc<RedisPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CacheStore for RedisCache {
    async fn get(&self, key: &str) -> Result<Option<String>, ApiError> {
        self.pool.get::<Option<String>, _>(key).await.map_err(|e| {
            error!("cache.get: GET {} failed: {}", key, e);
            ApiError::Cache(e.to_string())
        })
    }

    async fn set(&self, key: &str, value: &str, ttl_ms: u64) -> Result<(), ApiError> {
        self.pool
            .set::<(), _, _>(key, value, Some(Expiration::PX(ttl_ms as i64)), None, false)
            .await
            .map_err(|e| {
                error!("cache.set: SET {} failed: {}", key, e);
                ApiError::Cache(e.to_string())
            })
    }

    async fn delete(&self, key: &str) -> Result<(), ApiError> {
        self.pool
            .del::<u64, _>(key)
            .await
            .map(|_| ())
            .map_err(|e| {
                error!("cache.delete: DEL {} failed: {}", key, e);
                ApiError::Cache(e.to_string())
            })
    }
}
