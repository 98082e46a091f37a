mod observability;

pub mod utility;

pub use userhub_primitives::error::ApiError;

use crate::utility::db_pool::create_db_pool;
use crate::utility::logging::setup_logging;
use crate::utility::redis_pool::create_redis_pool;
use crate::utility::server::serve;
use crate::utility::tasks::{build_router, load_env};
use eyre::Report;
use tracing::info;
use userhub_core::app_state::AppState;
use userhub_primitives::models::app_state::AppConfig;

pub async fn run() -> Result<(), Report> {
    // 1. load environment variables
    load_env();

    // 2. initialize logging first (so we can log everything else)
    setup_logging();

    info!("Starting userhub...");

    // 3. load configuration
    let config = AppConfig::from_env()?;

    // 4. create database connection pool
    let pool = create_db_pool()?;

    // 5. connect the shared Redis cache pool
    let redis = create_redis_pool(&config.redis_details).await?;

    // 6. build application state
    let state = AppState::new(pool, redis, config)?;

    // 7. initialize metrics
    let (metric_layer, metric_handle) = observability::metrics::setup_metrics();

    // 8. build axum router
    let app = build_router(state, metric_layer, metric_handle)?;

    // 9. start HTTP server
    serve(app).await?;

    info!("userhub shut down gracefully");
    Ok(())
}
