//! Database connection settings

use std::fmt;
use std::path::PathBuf;

use sqlx::mysql::{MySqlConnectOptions, MySqlSslMode};

use super::pool::DEFAULT_MAX_CONNECTIONS;

/// Default MySQL port
pub const DEFAULT_PORT: u16 = 3306;

/// Connection settings for the MySQL store.
///
/// The connection is always TLS-secured; the server certificate must chain
/// to `ssl_ca` and name the host being connected to.
#[derive(Clone)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
    /// Path to the certificate authority file for the store's TLS cert
    pub ssl_ca: PathBuf,
    pub max_connections: u32,
}

impl DbConfig {
    pub fn new(
        host: impl Into<String>,
        user: impl Into<String>,
        password: impl Into<String>,
        database: impl Into<String>,
        ssl_ca: impl Into<PathBuf>,
    ) -> Self {
        Self {
            host: host.into(),
            port: DEFAULT_PORT,
            user: user.into(),
            password: password.into(),
            database: database.into(),
            ssl_ca: ssl_ca.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }

    /// sqlx connect options with CA and hostname verification enabled.
    pub fn connect_options(&self) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database)
            .ssl_mode(MySqlSslMode::VerifyIdentity)
            .ssl_ca(&self.ssl_ca)
    }
}

// Manual impl keeps the password out of logs
impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("database", &self.database)
            .field("ssl_ca", &self.ssl_ca)
            .field("max_connections", &self.max_connections)
            .finish()
    }
}
