//! Album repository
//!
//! Handles album reads and creation with:
//! - Atomic creation of artist, album, tracks and associations (transaction)
//! - Detail lookups with batched association queries (no N+1)

use std::collections::HashMap;

use sqlx::{FromRow, MySql, MySqlConnection, MySqlPool, QueryBuilder, Row};

use super::{contains_pattern, ArtistRepo, TrackRepo};
use crate::db::DbError;
use crate::models::{Album, AlbumDetail, Artist, NewAlbum, Track};

/// Album repository
pub struct AlbumRepo<'a> {
    pool: &'a MySqlPool,
}

impl<'a> AlbumRepo<'a> {
    pub fn new(pool: &'a MySqlPool) -> Self {
        Self { pool }
    }

    /// Albums whose name contains `fragment`.
    pub async fn search(&self, fragment: &str) -> Result<Vec<Album>, DbError> {
        let albums = sqlx::query_as::<_, Album>(
            r#"
            SELECT album_id, name, release_date, album_type
            FROM Albums
            WHERE name LIKE ?
            "#,
        )
        .bind(contains_pattern(fragment))
        .fetch_all(self.pool)
        .await?;

        Ok(albums)
    }

    /// Every album, unfiltered and unpaginated.
    pub async fn list_all(&self) -> Result<Vec<Album>, DbError> {
        let albums = sqlx::query_as::<_, Album>(
            "SELECT album_id, name, release_date, album_type FROM Albums",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(albums)
    }

    /// Create artist (if new), album, tracks and associations atomically.
    ///
    /// The transaction is opened before the first statement and owned here,
    /// so the failure path rolls back on the same connection that did the
    /// inserts. Returns the new album id.
    pub async fn create_with_tracks(&self, new: &NewAlbum) -> Result<i64, DbError> {
        let mut tx = self.pool.begin().await?;

        match insert_album_graph(&mut *tx, new).await {
            Ok(album_id) => {
                tx.commit().await?;
                Ok(album_id)
            }
            Err(e) => {
                // Dropping `tx` would also roll back; doing it explicitly
                // lets a failed rollback show up in the logs.
                if let Err(rollback_err) = tx.rollback().await {
                    tracing::error!(error = %rollback_err, "rollback of album insert failed");
                }
                Err(e)
            }
        }
    }

    /// Albums matching `fragment`, each with its artists and tracks.
    ///
    /// Three queries regardless of how many albums match.
    pub async fn details_matching(&self, fragment: &str) -> Result<Vec<AlbumDetail>, DbError> {
        let albums = self.search(fragment).await?;
        if albums.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i64> = albums.iter().map(|a| a.album_id).collect();
        let mut artists = self.artists_for(&ids).await?;
        let mut tracks = self.tracks_for(&ids).await?;

        Ok(albums
            .into_iter()
            .map(|album| AlbumDetail {
                artist: artists.remove(&album.album_id).unwrap_or_default(),
                tracks: tracks.remove(&album.album_id).unwrap_or_default(),
                album,
            })
            .collect())
    }

    async fn artists_for(&self, album_ids: &[i64]) -> Result<HashMap<i64, Vec<Artist>>, DbError> {
        let mut builder = QueryBuilder::<MySql>::new(
            r#"
            SELECT DISTINCT aa.album_id, a.artist_id, a.name, a.country
            FROM AlbumArtists aa
            JOIN Artists a ON a.artist_id = aa.artist_id
            WHERE aa.album_id IN (
            "#,
        );
        push_id_list(&mut builder, album_ids);
        builder.push(" ORDER BY aa.album_id, a.artist_id");

        let rows = builder.build().fetch_all(self.pool).await?;

        let mut grouped: HashMap<i64, Vec<Artist>> = HashMap::new();
        for row in &rows {
            let album_id: i64 = row.try_get("album_id")?;
            grouped.entry(album_id).or_default().push(Artist::from_row(row)?);
        }
        Ok(grouped)
    }

    async fn tracks_for(&self, album_ids: &[i64]) -> Result<HashMap<i64, Vec<Track>>, DbError> {
        let mut builder = QueryBuilder::<MySql>::new(
            r#"
            SELECT DISTINCT j.album_id, t.track_id, t.name, t.duration_seconds
            FROM AlbumTracks j
            JOIN Tracks t ON t.track_id = j.track_id
            WHERE j.album_id IN (
            "#,
        );
        push_id_list(&mut builder, album_ids);
        builder.push(" ORDER BY j.album_id, t.track_id");

        let rows = builder.build().fetch_all(self.pool).await?;

        let mut grouped: HashMap<i64, Vec<Track>> = HashMap::new();
        for row in &rows {
            let album_id: i64 = row.try_get("album_id")?;
            grouped.entry(album_id).or_default().push(Track::from_row(row)?);
        }
        Ok(grouped)
    }
}

/// Bind each id and close the `IN (` list.
fn push_id_list(builder: &mut QueryBuilder<'_, MySql>, ids: &[i64]) {
    let mut separated = builder.separated(", ");
    for id in ids {
        separated.push_bind(*id);
    }
    separated.push_unseparated(")");
}

/// The ordered insert sequence; later steps depend on ids from earlier ones.
async fn insert_album_graph(conn: &mut MySqlConnection, new: &NewAlbum) -> Result<i64, DbError> {
    let artist_id = ArtistRepo::find_or_create(&mut *conn, &new.artist).await?;

    let result = sqlx::query(
        r#"
        INSERT INTO Albums (name, release_date, album_type)
        VALUES (?, ?, ?)
        "#,
    )
    .bind(new.album.name.as_str())
    .bind(new.album.release_date)
    .bind(new.album.album_type.as_deref())
    .execute(&mut *conn)
    .await?;
    let album_id = result.last_insert_id() as i64;

    sqlx::query("INSERT INTO AlbumArtists (album_id, artist_id) VALUES (?, ?)")
        .bind(album_id)
        .bind(artist_id)
        .execute(&mut *conn)
        .await?;

    for track in &new.tracks {
        TrackRepo::insert_for_album(&mut *conn, album_id, track).await?;
    }

    Ok(album_id)
}
