use fred::clients::RedisPool;
use std::sync::Arc;

use eyre::Result;
pub use userhub_primitives::models::app_state::AppConfig;

use crate::cache::{CacheStore, RedisCache};
use crate::repositories::user_repository::{DbPool, PgUserStore, UserStore};
use crate::services::user_service::UserService;

#[derive(Clone)]
pub struct AppState {
    pub db: DbPool,
    pub users: UserService,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(db: DbPool, redis: Arc<RedisPool>, config: AppConfig) -> Result<Arc<Self>> {
        let store: Arc<dyn UserStore> = Arc::new(PgUserStore::new(db.clone()));
        let cache: Arc<dyn CacheStore> = Arc::new(RedisCache::new(redis));

        let users = UserService::new(store, cache, &config.cache_details);

        Ok(Arc::new(Self { db, users, config }))
    }

    /// Assemble state from preconstructed collaborators. Tests use this to
    /// substitute in-memory stores for Postgres and Redis.
    pub fn from_parts(
        db: DbPool,
        store: Arc<dyn UserStore>,
        cache: Arc<dyn CacheStore>,
        config: AppConfig,
    ) -> Arc<Self> {
        let users = UserService::new(store, cache, &config.cache_details);
        Arc::new(Self { db, users, config })
    }
}
