//! Connectivity check: open the pool, run one query, exit

use anyhow::{Context, Result};
use clap::Parser;

use tracklist_server::{create_pool, Catalog, DbConfig, MySqlCatalog};

use super::DbArgs;

/// Arguments for the check command
#[derive(Parser, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub db: DbArgs,
}

pub async fn run_check(args: CheckArgs) -> Result<()> {
    let db_config = DbConfig::from(args.db);
    tracing::debug!(?db_config, "checking database connectivity");

    let pool = create_pool(&db_config)
        .await
        .context("Failed to create database pool")?;
    let catalog = MySqlCatalog::new(pool);

    catalog.ping().await.context("Database query failed")?;
    catalog.close().await;

    println!(
        "✅ Connected to {}@{}:{}/{} over TLS",
        db_config.user, db_config.host, db_config.port, db_config.database
    );
    Ok(())
}
