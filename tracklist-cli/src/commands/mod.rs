//! Command implementations for tracklist CLI

pub mod check;
pub mod serve;

pub use check::run_check;
pub use serve::run_serve;

use std::path::PathBuf;

use clap::Args;
use tracklist_server::DbConfig;

/// Database connection flags shared by every command that needs the store
#[derive(Args, Debug)]
pub struct DbArgs {
    /// MySQL host
    #[arg(long, env = "DB_HOST")]
    pub db_host: String,

    /// MySQL port
    #[arg(long, env = "DB_PORT", default_value_t = tracklist_server::db::config::DEFAULT_PORT)]
    pub db_port: u16,

    /// MySQL user
    #[arg(long, env = "DB_USER")]
    pub db_user: String,

    /// MySQL password
    #[arg(long, env = "DB_PASS", hide_env_values = true)]
    pub db_pass: String,

    /// Database (schema) name
    #[arg(long, env = "DB_NAME")]
    pub db_name: String,

    /// Path to the CA certificate used to verify the server's TLS certificate
    #[arg(long, env = "DB_SSL_CA", value_name = "PATH")]
    pub db_ssl_ca: PathBuf,

    /// Maximum pooled connections
    #[arg(long, env = "DB_MAX_CONNECTIONS", default_value_t = tracklist_server::db::DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,
}

impl From<DbArgs> for DbConfig {
    fn from(args: DbArgs) -> Self {
        let mut config = DbConfig::new(
            args.db_host,
            args.db_user,
            args.db_pass,
            args.db_name,
            args.db_ssl_ca,
        );
        config.port = args.db_port;
        config.max_connections = args.max_connections;
        config
    }
}
