use eyre::Report;
use std::env;

#[derive(Debug, Clone)]
pub struct RedisInfo {
    pub url: String,
    pub pool_size: usize,
}

impl RedisInfo {
    pub fn new() -> Result<Self, Report> {
        Ok(Self {
            url: env::var("REDIS_URL").unwrap_or_else(|_| "redis://127.0.0.1:6379".into()),

            pool_size: env::var("REDIS_POOL_SIZE")
                .unwrap_or_else(|_| "4".into())
                .parse()?,
        })
    }
}
