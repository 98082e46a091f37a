use diesel::r2d2::{ConnectionManager, Pool};
use diesel::PgConnection;
use eyre::{eyre, Report};
use secrecy::{ExposeSecret, SecretString};
use std::env;
use std::time::Duration;
use tracing::info;

pub fn create_db_pool() -> Result<Pool<ConnectionManager<PgConnection>>, Report> {
    let db_url = SecretString::new(Box::from(
        env::var("DATABASE_URL").map_err(|_| eyre!("DATABASE_URL must be set"))?,
    ));

    let manager = ConnectionManager::<PgConnection>::new(db_url.expose_secret());

    let pool = Pool::builder()
        .max_size(20)
        .min_idle(Some(2))
        .connection_timeout(Duration::from_secs(8))
        .idle_timeout(Some(Duration::from_secs(300)))
        .test_on_check_out(true)
        .build(manager)?;

    info!("PostgreSQL connection pool created (max_size: 20)");

    Ok(pool)
}
