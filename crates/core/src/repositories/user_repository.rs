use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool, PooledConnection};
use diesel::PgConnection;

use userhub_primitives::error::ApiError;
use userhub_primitives::models::entities::user::{NewUser, User};
use userhub_primitives::schema::users;

pub type DbPool = Pool<ConnectionManager<PgConnection>>;
type DbConnection = PooledConnection<ConnectionManager<PgConnection>>;

/// Record-store contract for user rows. "Active" always means
/// `deleted_at IS NULL`; soft-deleted rows stay in storage with their
/// history intact.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Look up by email. `include_deleted` also surfaces soft-deleted rows,
    /// which the create path needs to find restore candidates.
    async fn find_by_email(
        &self,
        email: &str,
        include_deleted: bool,
    ) -> Result<Option<User>, ApiError>;

    /// Active rows only.
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, ApiError>;

    /// All active rows, in id order.
    async fn find_all(&self) -> Result<Vec<User>, ApiError>;

    async fn insert(&self, new_user: NewUser) -> Result<User, ApiError>;

    /// Full-row update matched by id regardless of deletion state, so a
    /// single write can overlay fields and clear `deleted_at`.
    async fn update(&self, user: &User) -> Result<User, ApiError>;

    /// Sets `deleted_at` on the active row with this id. Returns the number
    /// of rows affected; 0 means the id was absent or already soft-deleted.
    async fn soft_delete(&self, id: i32) -> Result<usize, ApiError>;

    /// Clears `deleted_at`. Returns the number of rows affected.
    async fn restore(&self, id: i32) -> Result<usize, ApiError>;
}

#[derive(Clone)]
pub struct PgUserStore {
    pool: DbPool,
}

impl PgUserStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> Result<DbConnection, ApiError> {
        self.pool.get().map_err(ApiError::from)
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn find_by_email(
        &self,
        email: &str,
        include_deleted: bool,
    ) -> Result<Option<User>, ApiError> {
        let mut conn = self.conn()?;

        let mut query = users::table.filter(users::email.eq(email)).into_boxed();
        if !include_deleted {
            query = query.filter(users::deleted_at.is_null());
        }

        query
            .first::<User>(&mut conn)
            .optional()
            .map_err(ApiError::from)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<User>, ApiError> {
        let mut conn = self.conn()?;

        users::table
            .find(id)
            .filter(users::deleted_at.is_null())
            .first::<User>(&mut conn)
            .optional()
            .map_err(ApiError::from)
    }

    async fn find_all(&self) -> Result<Vec<User>, ApiError> {
        let mut conn = self.conn()?;

        users::table
            .filter(users::deleted_at.is_null())
            .order(users::id.asc())
            .load::<User>(&mut conn)
            .map_err(ApiError::from)
    }

    async fn insert(&self, new_user: NewUser) -> Result<User, ApiError> {
        let mut conn = self.conn()?;

        diesel::insert_into(users::table)
            .values(&new_user)
            .get_result::<User>(&mut conn)
            .map_err(ApiError::from)
    }

    async fn update(&self, user: &User) -> Result<User, ApiError> {
        let mut conn = self.conn()?;

        diesel::update(users::table.find(user.id))
            .set((
                users::name.eq(&user.name),
                users::email.eq(&user.email),
                users::updated_at.eq(user.updated_at),
                users::deleted_at.eq(user.deleted_at),
            ))
            .get_result::<User>(&mut conn)
            .map_err(ApiError::from)
    }

    async fn soft_delete(&self, id: i32) -> Result<usize, ApiError> {
        let mut conn = self.conn()?;
        let now = Utc::now();

        diesel::update(users::table.find(id).filter(users::deleted_at.is_null()))
            .set((
                users::deleted_at.eq(Some(now)),
                users::updated_at.eq(now),
            ))
            .execute(&mut conn)
            .map_err(ApiError::from)
    }

    async fn restore(&self, id: i32) -> Result<usize, ApiError> {
        let mut conn = self.conn()?;

        diesel::update(users::table.find(id))
            .set((
                users::deleted_at.eq(None::<DateTime<Utc>>),
                users::updated_at.eq(Utc::now()),
            ))
            .execute(&mut conn)
            .map_err(ApiError::from)
    }
}
