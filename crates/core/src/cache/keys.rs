use userhub_primitives::models::CacheInfo;

/// Derives the cache keys used by the user service. The per-user key is the
/// configured prefix followed by the decimal id; the collection key is one
/// configured constant shared by every list-all result.
#[derive(Debug, Clone)]
pub struct CacheKeys {
    all_users: String,
    user_prefix: String,
}

impl CacheKeys {
    pub fn new(config: &CacheInfo) -> Self {
        Self {
            all_users: config.all_users_key.clone(),
            user_prefix: config.user_key_prefix.clone(),
        }
    }

    pub fn all_users(&self) -> &str {
        &self.all_users
    }

    pub fn user(&self, id: i32) -> String {
        format!("{}{}", self.user_prefix, id)
    }
}
