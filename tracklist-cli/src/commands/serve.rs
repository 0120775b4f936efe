//! HTTP server command
//!
//! Connects the MySQL pool and runs the album/artist/track API until shutdown.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use tracklist_server::{create_pool, run_server, DbConfig, MySqlCatalog, ServerConfig};

use super::DbArgs;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    #[command(flatten)]
    pub db: DbArgs,

    /// Address to bind to
    #[arg(long, short = 'b', default_value = "127.0.0.1:3000")]
    pub bind: SocketAddr,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let db_config = DbConfig::from(args.db);
    tracing::info!(
        host = %db_config.host,
        database = %db_config.database,
        "Starting tracklist server on {}",
        args.bind
    );

    let pool = create_pool(&db_config)
        .await
        .context("Failed to create database pool")?;
    let catalog = Arc::new(MySqlCatalog::new(pool));

    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
    };

    // Blocks until shutdown
    run_server(catalog.clone(), config)
        .await
        .context("Server error")?;

    catalog.close().await;
    Ok(())
}
