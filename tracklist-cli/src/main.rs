//! tracklist CLI - album, artist and track catalog service
//!
//! Entry point for the `tracklist` binary:
//! - `serve`: run the HTTP API over the MySQL catalog
//! - `check`: verify database connectivity and exit

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "tracklist",
    author,
    version,
    about = "HTTP API for searching and creating albums, artists and tracks",
    long_about = "Serve name search, album listing, album detail and album creation endpoints \
                  over a MySQL schema. Connection settings come from flags, the environment \
                  or a .env file in the working directory."
)]
struct Cli {
    /// Enable debug logging (unless RUST_LOG is set)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
    /// Connect to the database, run a test query and exit
    Check(commands::check::CheckArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Before parsing so clap's `env` fallbacks see values from .env
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug }).ok();

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
        Commands::Check(args) => commands::run_check(args).await?,
    }
    Ok(())
}
