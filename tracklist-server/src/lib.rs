//! tracklist-server: HTTP facade over the Albums/Artists/Tracks schema
//!
//! Exposes name search across the three tables, a full album listing,
//! album detail lookups and an atomic album creation endpoint.

pub mod db;
pub mod http;
pub mod models;

#[cfg(test)]
pub(crate) mod testing;

pub use db::{create_pool, Catalog, DbConfig, DbError, MySqlCatalog};
pub use http::{build_router, run_server, ApiError, AppState, ServerConfig, ServerError};
