use std::sync::Arc;

use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{info, warn};

use userhub_primitives::error::ApiError;
use userhub_primitives::models::{CacheInfo, CreateUserRequest, NewUser, UpdateUserRequest, User};

use crate::cache::{CacheKeys, CacheStore};
use crate::repositories::user_repository::UserStore;

/// Orchestrates reads and writes across the record store and the cache.
///
/// Reads go through a per-id key and one collection key; every mutation
/// invalidates or repopulates both keys before returning, so a subsequent
/// read never observes the pre-mutation cached value.
///
/// The find-then-write sequences here are not serialized across requests:
/// two concurrent updates of the same id can lose one of the merges.
/// Correctness under that race rests on the record store's transactional
/// guarantees, not on this layer. Concurrent misses on the same key may
/// each query the store and repopulate the cache independently.
#[derive(Clone)]
pub struct UserService {
    store: Arc<dyn UserStore>,
    cache: Arc<dyn CacheStore>,
    keys: CacheKeys,
    ttl_ms: u64,
}

impl UserService {
    pub fn new(store: Arc<dyn UserStore>, cache: Arc<dyn CacheStore>, config: &CacheInfo) -> Self {
        Self {
            store,
            cache,
            keys: CacheKeys::new(config),
            ttl_ms: config.ttl_ms,
        }
    }

    /// Creates a user, or restores the soft-deleted row holding this email.
    /// An active row with the same email is a conflict.
    pub async fn create(&self, payload: CreateUserRequest) -> Result<User, ApiError> {
        // Restore candidates require the lookup to see soft-deleted rows.
        if let Some(existing) = self.store.find_by_email(&payload.email, true).await? {
            if !existing.is_deleted() {
                return Err(ApiError::Conflict("Email already in use".to_string()));
            }

            let restored = User {
                name: payload.name,
                email: payload.email,
                updated_at: Utc::now(),
                deleted_at: None,
                ..existing
            };
            let user = self.store.update(&restored).await?;

            self.cache_user(&user).await?;
            self.cache.delete(self.keys.all_users()).await?;

            info!(user_id = user.id, "users.create: restored soft-deleted user");
            return Ok(user);
        }

        let user = self
            .store
            .insert(NewUser {
                name: payload.name,
                email: payload.email,
            })
            .await?;

        self.cache_user(&user).await?;
        self.cache.delete(self.keys.all_users()).await?;

        info!(user_id = user.id, "users.create: created user");
        Ok(user)
    }

    pub async fn find_all(&self) -> Result<Vec<User>, ApiError> {
        if let Some(users) = self.cache_get::<Vec<User>>(self.keys.all_users()).await? {
            return Ok(users);
        }

        let users = self.store.find_all().await?;
        self.cache_set(self.keys.all_users(), &users).await?;
        Ok(users)
    }

    pub async fn find_one(&self, id: i32) -> Result<User, ApiError> {
        let key = self.keys.user(id);
        if let Some(user) = self.cache_get::<User>(&key).await? {
            return Ok(user);
        }

        let user = self
            .store
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("User with id {} not found", id)))?;

        self.cache_set(&key, &user).await?;
        Ok(user)
    }

    /// Merges the present fields over the stored row. Soft-deleted ids are
    /// not updatable and report NotFound.
    pub async fn update(&self, id: i32, payload: UpdateUserRequest) -> Result<User, ApiError> {
        let mut user = self
            .store
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("User with id {} not found", id)))?;

        // Drop both keys before the write so no reader holds on to the old
        // row between the write and the repopulation below.
        self.cache.delete(&self.keys.user(id)).await?;
        self.cache.delete(self.keys.all_users()).await?;

        if let Some(name) = payload.name {
            user.name = name;
        }
        if let Some(email) = payload.email {
            user.email = email;
        }
        user.updated_at = Utc::now();

        let user = self.store.update(&user).await?;
        self.cache_user(&user).await?;

        info!(user_id = user.id, "users.update: updated user");
        Ok(user)
    }

    pub async fn remove(&self, id: i32) -> Result<(), ApiError> {
        self.cache.delete(&self.keys.user(id)).await?;
        self.cache.delete(self.keys.all_users()).await?;

        let affected = self.store.soft_delete(id).await?;
        if affected == 0 {
            return Err(ApiError::NotFound(format!("User with id {} not found", id)));
        }

        info!(user_id = id, "users.remove: soft-deleted user");
        Ok(())
    }

    async fn cache_user(&self, user: &User) -> Result<(), ApiError> {
        self.cache_set(&self.keys.user(user.id), user).await
    }

    async fn cache_set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), ApiError> {
        let raw = serde_json::to_string(value)?;
        self.cache.set(key, &raw, self.ttl_ms).await
    }

    /// Read-through helper. A cache transport failure propagates; an
    /// undecodable payload is logged and treated as a miss so the next
    /// population overwrites it.
    async fn cache_get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, ApiError> {
        let Some(raw) = self.cache.get(key).await? else {
            return Ok(None);
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                warn!("users.cache: dropping undecodable entry under {}: {}", key, e);
                Ok(None)
            }
        }
    }
}
