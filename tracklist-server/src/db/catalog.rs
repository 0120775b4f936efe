//! Data-access seam used by the HTTP handlers
//!
//! Handlers receive an `Arc<dyn Catalog>` through `AppState` instead of
//! reaching for a process-wide pool. `MySqlCatalog` is the production
//! implementation; tests substitute an in-memory one.

use async_trait::async_trait;
use sqlx::MySqlPool;

use super::repos::{AlbumRepo, ArtistRepo, TrackRepo};
use super::DbError;
use crate::models::{Album, AlbumDetail, Artist, NewAlbum, Track};

/// Read and write operations over the Albums/Artists/Tracks schema
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Albums whose name contains `fragment`.
    async fn search_albums(&self, fragment: &str) -> Result<Vec<Album>, DbError>;

    /// Artists whose name contains `fragment`.
    async fn search_artists(&self, fragment: &str) -> Result<Vec<Artist>, DbError>;

    /// Tracks whose name contains `fragment`.
    async fn search_tracks(&self, fragment: &str) -> Result<Vec<Track>, DbError>;

    /// Every album row.
    async fn list_albums(&self) -> Result<Vec<Album>, DbError>;

    /// Create artist (when new), album, tracks and associations atomically.
    /// Returns the new album id.
    async fn create_album(&self, new: &NewAlbum) -> Result<i64, DbError>;

    /// Albums whose name contains `fragment`, with artists and tracks attached.
    async fn album_details(&self, fragment: &str) -> Result<Vec<AlbumDetail>, DbError>;

    /// Round-trip to the store.
    async fn ping(&self) -> Result<(), DbError>;
}

/// Catalog backed by a MySQL pool
#[derive(Clone)]
pub struct MySqlCatalog {
    pool: MySqlPool,
}

impl MySqlCatalog {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Close the pool, waiting for borrowed connections to come back.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl Catalog for MySqlCatalog {
    async fn search_albums(&self, fragment: &str) -> Result<Vec<Album>, DbError> {
        AlbumRepo::new(&self.pool).search(fragment).await
    }

    async fn search_artists(&self, fragment: &str) -> Result<Vec<Artist>, DbError> {
        ArtistRepo::new(&self.pool).search(fragment).await
    }

    async fn search_tracks(&self, fragment: &str) -> Result<Vec<Track>, DbError> {
        TrackRepo::new(&self.pool).search(fragment).await
    }

    async fn list_albums(&self) -> Result<Vec<Album>, DbError> {
        AlbumRepo::new(&self.pool).list_all().await
    }

    async fn create_album(&self, new: &NewAlbum) -> Result<i64, DbError> {
        AlbumRepo::new(&self.pool).create_with_tracks(new).await
    }

    async fn album_details(&self, fragment: &str) -> Result<Vec<AlbumDetail>, DbError> {
        AlbumRepo::new(&self.pool).details_matching(fragment).await
    }

    async fn ping(&self) -> Result<(), DbError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
