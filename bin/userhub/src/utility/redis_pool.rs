use eyre::{Report, WrapErr};
use fred::clients::RedisPool;
use fred::interfaces::ClientLike;
use fred::types::RedisConfig;
use std::sync::Arc;
use tracing::info;
use userhub_primitives::models::RedisInfo;

pub async fn create_redis_pool(config: &RedisInfo) -> Result<Arc<RedisPool>, Report> {
    let redis = Arc::new(
        RedisPool::new(
            RedisConfig::from_url(&config.url).wrap_err("failed to parse redis url")?,
            None,
            None,
            None,
            config.pool_size,
        )
        .wrap_err("failed to create redis pool")?,
    );

    let _ = redis.connect();
    redis
        .wait_for_connect()
        .await
        .wrap_err("failed to connect to redis")?;

    info!(
        "Redis connection pool created (pool_size: {})",
        config.pool_size
    );

    Ok(redis)
}
