use crate::models::app_state::cache_details::CacheInfo;
use crate::models::app_state::redis_details::RedisInfo;
use eyre::Report;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub cache_details: CacheInfo,

    pub redis_details: RedisInfo,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, Report> {
        Ok(Self {
            cache_details: CacheInfo::new()?,

            redis_details: RedisInfo::new()?,
        })
    }
}
