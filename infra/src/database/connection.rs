//! Connection pool management for MySQL

use sqlx::mysql::MySqlPoolOptions;
use sqlx::MySqlPool;
use std::time::Duration;

use ds_shared::config::database::DatabaseConfig;

use crate::InfrastructureError;

/// Create a MySQL connection pool from configuration.
///
/// The pool is lazy about spare connections but verifies liveness on
/// checkout, so a restarted database does not surface as stale handles.
pub async fn create_pool(config: &DatabaseConfig) -> Result<MySqlPool, InfrastructureError> {
    let pool = MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout))
        .idle_timeout(Duration::from_secs(config.idle_timeout))
        .test_before_acquire(true)
        .connect(&config.url)
        .await?;

    tracing::info!(
        max_connections = config.max_connections,
        event = "database_pool_created",
        "Database connection pool established"
    );

    Ok(pool)
}
