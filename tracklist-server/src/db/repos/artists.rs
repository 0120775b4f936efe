//! Artist repository
//!
//! - search: substring match on name
//! - find_or_create: exact-name lookup, insert when absent (transaction step)

use sqlx::{MySqlConnection, MySqlPool};

use super::contains_pattern;
use crate::db::DbError;
use crate::models::{Artist, NewArtist};

/// Artist repository
pub struct ArtistRepo<'a> {
    pool: &'a MySqlPool,
}

impl<'a> ArtistRepo<'a> {
    pub fn new(pool: &'a MySqlPool) -> Self {
        Self { pool }
    }

    /// Artists whose name contains `fragment`.
    pub async fn search(&self, fragment: &str) -> Result<Vec<Artist>, DbError> {
        let artists = sqlx::query_as::<_, Artist>(
            r#"
            SELECT artist_id, name, country
            FROM Artists
            WHERE name LIKE ?
            "#,
        )
        .bind(contains_pattern(fragment))
        .fetch_all(self.pool)
        .await?;

        Ok(artists)
    }

    /// Reuse the artist with this exact name, or insert a new one.
    ///
    /// Runs on the caller's connection so it joins the caller's transaction.
    /// Returns the artist id.
    pub async fn find_or_create(
        conn: &mut MySqlConnection,
        artist: &NewArtist,
    ) -> Result<i64, DbError> {
        let existing: Option<i64> = sqlx::query_scalar(
            r#"
            SELECT artist_id
            FROM Artists
            WHERE name = ?
            ORDER BY artist_id
            LIMIT 1
            "#,
        )
        .bind(artist.name.as_str())
        .fetch_optional(&mut *conn)
        .await?;

        if let Some(artist_id) = existing {
            tracing::debug!(artist_id, name = artist.name.as_str(), "reusing existing artist");
            return Ok(artist_id);
        }

        let result = sqlx::query("INSERT INTO Artists (name, country) VALUES (?, ?)")
            .bind(artist.name.as_str())
            .bind(artist.country.as_deref())
            .execute(&mut *conn)
            .await?;

        let artist_id = result.last_insert_id() as i64;
        tracing::debug!(artist_id, name = artist.name.as_str(), "inserted artist");
        Ok(artist_id)
    }
}
