#![allow(dead_code)]

use async_trait::async_trait;
use chrono::Utc;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::PgConnection;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI32, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use userhub_core::cache::CacheStore;
use userhub_core::repositories::user_repository::{DbPool, UserStore};
use userhub_core::services::user_service::UserService;
use userhub_core::AppState;
use userhub_primitives::error::ApiError;
use userhub_primitives::models::{AppConfig, CacheInfo, NewUser, RedisInfo, User};

pub mod fixtures;

/// In-memory stand-in for the Postgres record store. Mirrors the contract's
/// soft-delete semantics, including the unique email constraint spanning
/// active and deleted rows.
pub struct InMemoryUserStore {
    rows: Mutex<Vec<User>>,
    next_id: AtomicI32,
    find_all_calls: AtomicUsize,
    find_by_id_calls: AtomicUsize,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            next_id: AtomicI32::new(1),
            find_all_calls: AtomicUsize::new(0),
            find_by_id_calls: AtomicUsize::new(0),
        }
    }

    /// Total rows in storage, soft-deleted ones included.
    pub fn row_count(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    /// Raw row access bypassing the active-only filters.
    pub fn raw(&self, id: i32) -> Option<User> {
        self.rows.lock().unwrap().iter().find(|u| u.id == id).cloned()
    }

    pub fn find_all_calls(&self) -> usize {
        self.find_all_calls.load(Ordering::SeqCst)
    }

    pub fn find_by_id_calls(&self) -> usize {
        self.find_by_id_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_email(
        &self,
        email: &str,
        include_deleted: bool,
    ) -> Result<Option<User>, ApiError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .find(|u| u.email == email && (include_deleted || u.deleted_at.is_none()))
            .cloned())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<User>, ApiError> {
        self.find_by_id_calls.fetch_add(1, Ordering::SeqCst);
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .find(|u| u.id == id && u.deleted_at.is_none())
            .cloned())
    }

    async fn find_all(&self) -> Result<Vec<User>, ApiError> {
        self.find_all_calls.fetch_add(1, Ordering::SeqCst);
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .filter(|u| u.deleted_at.is_none())
            .cloned()
            .collect())
    }

    async fn insert(&self, new_user: NewUser) -> Result<User, ApiError> {
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|u| u.email == new_user.email) {
            return Err(ApiError::Conflict("Email already in use".to_string()));
        }

        let now = Utc::now();
        let user = User {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            name: new_user.name,
            email: new_user.email,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };
        rows.push(user.clone());
        Ok(user)
    }

    async fn update(&self, user: &User) -> Result<User, ApiError> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|u| u.id == user.id)
            .ok_or_else(|| ApiError::NotFound(format!("User with id {} not found", user.id)))?;
        *row = user.clone();
        Ok(row.clone())
    }

    async fn soft_delete(&self, id: i32) -> Result<usize, ApiError> {
        let mut rows = self.rows.lock().unwrap();
        match rows.iter_mut().find(|u| u.id == id && u.deleted_at.is_none()) {
            Some(row) => {
                let now = Utc::now();
                row.deleted_at = Some(now);
                row.updated_at = now;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn restore(&self, id: i32) -> Result<usize, ApiError> {
        let mut rows = self.rows.lock().unwrap();
        match rows.iter_mut().find(|u| u.id == id) {
            Some(row) => {
                row.deleted_at = None;
                row.updated_at = Utc::now();
                Ok(1)
            }
            None => Ok(0),
        }
    }
}

/// In-memory stand-in for Redis. TTLs are enforced on read so expiry tests
/// behave like the real store.
pub struct InMemoryCache {
    entries: Mutex<HashMap<String, (String, Instant)>>,
}

impl InMemoryCache {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// True when the key holds an unexpired entry.
    pub fn has(&self, key: &str) -> bool {
        let entries = self.entries.lock().unwrap();
        entries
            .get(key)
            .map(|(_, expires)| *expires > Instant::now())
            .unwrap_or(false)
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        let entries = self.entries.lock().unwrap();
        entries.get(key).map(|(value, _)| value.clone())
    }

    /// Plant an arbitrary payload, for corrupt-entry scenarios.
    pub fn insert_raw(&self, key: &str, value: &str) {
        let mut entries = self.entries.lock().unwrap();
        entries.insert(
            key.to_string(),
            (value.to_string(), Instant::now() + Duration::from_secs(600)),
        );
    }
}

#[async_trait]
impl CacheStore for InMemoryCache {
    async fn get(&self, key: &str) -> Result<Option<String>, ApiError> {
        let mut entries = self.entries.lock().unwrap();
        let now = Instant::now();

        let live = entries
            .get(key)
            .filter(|(_, expires)| *expires > now)
            .map(|(value, _)| value.clone());
        if live.is_none() {
            entries.remove(key);
        }
        Ok(live)
    }

    async fn set(&self, key: &str, value: &str, ttl_ms: u64) -> Result<(), ApiError> {
        let mut entries = self.entries.lock().unwrap();
        entries.insert(
            key.to_string(),
            (
                value.to_string(),
                Instant::now() + Duration::from_millis(ttl_ms),
            ),
        );
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), ApiError> {
        let mut entries = self.entries.lock().unwrap();
        entries.remove(key);
        Ok(())
    }
}

pub fn test_cache_info() -> CacheInfo {
    CacheInfo {
        ttl_ms: 600_000,
        all_users_key: "all_users".to_string(),
        user_key_prefix: "user_".to_string(),
    }
}

pub fn test_config() -> AppConfig {
    AppConfig {
        cache_details: test_cache_info(),
        redis_details: RedisInfo {
            url: "redis://127.0.0.1:6379".to_string(),
            pool_size: 1,
        },
    }
}

/// A pool that never connects. Endpoint tests exercise the user routes only,
/// so nothing ever checks a connection out.
pub fn lazy_db_pool() -> DbPool {
    Pool::builder()
        .connection_timeout(Duration::from_millis(100))
        .build_unchecked(ConnectionManager::<PgConnection>::new("postgres://invalid"))
}

pub fn test_service(
    store: Arc<InMemoryUserStore>,
    cache: Arc<InMemoryCache>,
    config: &CacheInfo,
) -> UserService {
    UserService::new(store, cache, config)
}

pub fn test_state(store: Arc<InMemoryUserStore>, cache: Arc<InMemoryCache>) -> Arc<AppState> {
    AppState::from_parts(lazy_db_pool(), store, cache, test_config())
}
