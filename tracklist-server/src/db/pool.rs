//! Database connection pool management
//!
//! Uses sqlx MySqlPool with explicit connection limits. Connections are
//! returned to the pool when the borrowing handle is dropped, on success
//! and failure paths alike.

use sqlx::mysql::MySqlPoolOptions;
use sqlx::MySqlPool;

use super::{DbConfig, DbError};

/// Default maximum connections for the pool.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Create a MySQL connection pool.
///
/// Connects eagerly so bad credentials or an untrusted server certificate
/// surface at startup instead of on the first request.
///
/// # Errors
///
/// Returns `DbError::MissingCaFile` if the CA path is not a file, or the
/// underlying sqlx error if the first connection fails.
///
/// # Example
///
/// ```ignore
/// let config = DbConfig::new("localhost", "app", "secret", "music", "ca.pem");
/// let pool = create_pool(&config).await?;
/// ```
pub async fn create_pool(config: &DbConfig) -> Result<MySqlPool, DbError> {
    if !config.ssl_ca.is_file() {
        return Err(DbError::MissingCaFile(config.ssl_ca.clone()));
    }

    tracing::debug!(
        host = %config.host,
        database = %config.database,
        max_connections = config.max_connections,
        "connecting to MySQL"
    );

    let pool = MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(config.connect_options())
        .await?;

    Ok(pool)
}
