//! Track repository

use sqlx::{MySqlConnection, MySqlPool};

use super::contains_pattern;
use crate::db::DbError;
use crate::models::{NewTrack, Track};

/// Track repository
pub struct TrackRepo<'a> {
    pool: &'a MySqlPool,
}

impl<'a> TrackRepo<'a> {
    pub fn new(pool: &'a MySqlPool) -> Self {
        Self { pool }
    }

    /// Tracks whose name contains `fragment`.
    pub async fn search(&self, fragment: &str) -> Result<Vec<Track>, DbError> {
        let tracks = sqlx::query_as::<_, Track>(
            r#"
            SELECT track_id, name, duration_seconds
            FROM Tracks
            WHERE name LIKE ?
            "#,
        )
        .bind(contains_pattern(fragment))
        .fetch_all(self.pool)
        .await?;

        Ok(tracks)
    }

    /// Insert a track row and its AlbumTracks association.
    ///
    /// Runs on the caller's connection so it joins the caller's transaction.
    pub async fn insert_for_album(
        conn: &mut MySqlConnection,
        album_id: i64,
        track: &NewTrack,
    ) -> Result<i64, DbError> {
        let result = sqlx::query("INSERT INTO Tracks (name, duration_seconds) VALUES (?, ?)")
            .bind(track.name.as_str())
            .bind(track.duration_seconds)
            .execute(&mut *conn)
            .await?;
        let track_id = result.last_insert_id() as i64;

        sqlx::query(
            r#"
            INSERT INTO AlbumTracks (album_id, track_id, is_bonus_track)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(album_id)
        .bind(track_id)
        .bind(track.is_bonus_track)
        .execute(&mut *conn)
        .await?;

        Ok(track_id)
    }
}
