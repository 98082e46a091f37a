use eyre::Report;
use std::env;

/// Cache policy knobs for the user service. TTL is in milliseconds and is
/// applied to both the per-user keys and the collection key.
#[derive(Debug, Clone)]
pub struct CacheInfo {
    pub ttl_ms: u64,
    pub all_users_key: String,
    pub user_key_prefix: String,
}

impl CacheInfo {
    pub fn new() -> Result<Self, Report> {
        Ok(Self {
            ttl_ms: env::var("CACHE_TTL_MS")
                .unwrap_or_else(|_| "600000".into())
                .parse()?,

            all_users_key: env::var("CACHE_ALL_USERS_KEY").unwrap_or_else(|_| "all_users".into()),

            user_key_prefix: env::var("CACHE_USER_KEY_PREFIX").unwrap_or_else(|_| "user_".into()),
        })
    }
}
