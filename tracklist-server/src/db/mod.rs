//! Database layer - connection pool, repositories and the Catalog seam
//!
//! # Design Principles
//!
//! - Connection pool (default 10 connections), handed out per operation
//! - Detail lookups batch their association queries - no N+1 queries
//! - Album creation is a single transaction, rolled back on any failure
//! - Handlers only see the `Catalog` trait, never the pool

pub mod catalog;
pub mod config;
pub mod error;
pub mod pool;
pub mod repos;

pub use catalog::{Catalog, MySqlCatalog};
pub use config::DbConfig;
pub use error::DbError;
pub use pool::{create_pool, DEFAULT_MAX_CONNECTIONS};
