//! Test support: an in-memory Catalog and database settings from the environment

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use async_trait::async_trait;

use crate::db::{Catalog, DbConfig, DbError};
use crate::models::{Album, AlbumDetail, AlbumDraft, Artist, NewAlbum, NewArtist, NewTrack, Track};

/// Read MySQL settings for `#[ignore]`d integration tests.
pub(crate) fn db_config_from_env() -> DbConfig {
    let var = |name: &str| std::env::var(name).unwrap_or_else(|_| panic!("{name} required"));
    let mut config = DbConfig::new(
        var("DB_HOST"),
        var("DB_USER"),
        var("DB_PASS"),
        var("DB_NAME"),
        var("DB_SSL_CA"),
    );
    if let Ok(port) = std::env::var("DB_PORT") {
        config.port = port.parse().expect("DB_PORT must be a port number");
    }
    config
}

/// Name that won't collide with rows left by earlier runs.
pub(crate) fn unique_name(prefix: &str) -> String {
    static COUNTER: AtomicUsize = AtomicUsize::new(0);
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();
    format!("{prefix}-{nanos}-{}", COUNTER.fetch_add(1, Ordering::Relaxed))
}

/// Valid creation payload with 180 second regular tracks.
pub(crate) fn sample_album(artist: &str, album: &str, tracks: &[&str]) -> NewAlbum {
    NewAlbum {
        artist: NewArtist::new(artist, Some("Y".into())).unwrap(),
        album: AlbumDraft::new(album, Some("2020-01-01"), Some("LP".into())).unwrap(),
        tracks: tracks
            .iter()
            .map(|t| NewTrack::new(t, Some(180), None).unwrap())
            .collect(),
    }
}

#[derive(Debug, Clone, Default)]
struct Tables {
    artists: Vec<Artist>,
    albums: Vec<Album>,
    tracks: Vec<Track>,
    album_artists: Vec<(i64, i64)>,
    album_tracks: Vec<(i64, i64, bool)>,
    next_id: i64,
}

impl Tables {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

/// Row counts per table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct RowCounts {
    pub artists: usize,
    pub albums: usize,
    pub tracks: usize,
    pub album_artists: usize,
    pub album_tracks: usize,
}

/// In-memory Catalog with the same atomicity rules as the MySQL one.
///
/// `create_album` works on a copy of the tables and only swaps it in once
/// every insert succeeded.
#[derive(Default)]
pub(crate) struct MemoryCatalog {
    tables: Mutex<Tables>,
    fail_on_track: Option<String>,
    unavailable: bool,
    calls: AtomicUsize,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserting a track with this name fails like a constraint violation.
    pub fn failing_on_track(name: &str) -> Self {
        Self {
            fail_on_track: Some(name.to_owned()),
            ..Self::default()
        }
    }

    /// Every operation fails like a lost connection.
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    /// Number of data-access calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn row_counts(&self) -> RowCounts {
        let t = self.tables.lock().unwrap();
        RowCounts {
            artists: t.artists.len(),
            albums: t.albums.len(),
            tracks: t.tracks.len(),
            album_artists: t.album_artists.len(),
            album_tracks: t.album_tracks.len(),
        }
    }

    /// `AlbumTracks` rows as `(album_id, track_id, is_bonus_track)`.
    pub fn album_tracks(&self) -> Vec<(i64, i64, bool)> {
        self.tables.lock().unwrap().album_tracks.clone()
    }

    fn enter(&self) -> Result<(), DbError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.unavailable {
            return Err(DbError::Sqlx(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }

    fn matching<T: Clone>(rows: &[T], fragment: &str, name: impl Fn(&T) -> &str) -> Vec<T> {
        rows.iter()
            .filter(|r| name(r).contains(fragment))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl Catalog for MemoryCatalog {
    async fn search_albums(&self, fragment: &str) -> Result<Vec<Album>, DbError> {
        self.enter()?;
        let t = self.tables.lock().unwrap();
        Ok(Self::matching(&t.albums, fragment, |a| a.name.as_str()))
    }

    async fn search_artists(&self, fragment: &str) -> Result<Vec<Artist>, DbError> {
        self.enter()?;
        let t = self.tables.lock().unwrap();
        Ok(Self::matching(&t.artists, fragment, |a| a.name.as_str()))
    }

    async fn search_tracks(&self, fragment: &str) -> Result<Vec<Track>, DbError> {
        self.enter()?;
        let t = self.tables.lock().unwrap();
        Ok(Self::matching(&t.tracks, fragment, |tr| tr.name.as_str()))
    }

    async fn list_albums(&self) -> Result<Vec<Album>, DbError> {
        self.enter()?;
        Ok(self.tables.lock().unwrap().albums.clone())
    }

    async fn create_album(&self, new: &NewAlbum) -> Result<i64, DbError> {
        self.enter()?;
        let mut guard = self.tables.lock().unwrap();
        let mut t = guard.clone();

        let artist_id = match t.artists.iter().find(|a| a.name == new.artist.name.as_str()) {
            Some(existing) => existing.artist_id,
            None => {
                let artist_id = t.next_id();
                t.artists.push(Artist {
                    artist_id,
                    name: new.artist.name.as_str().to_owned(),
                    country: new.artist.country.clone(),
                });
                artist_id
            }
        };

        let album_id = t.next_id();
        t.albums.push(Album {
            album_id,
            name: new.album.name.as_str().to_owned(),
            release_date: new.album.release_date,
            album_type: new.album.album_type.clone(),
        });
        t.album_artists.push((album_id, artist_id));

        for track in &new.tracks {
            if self.fail_on_track.as_deref() == Some(track.name.as_str()) {
                // `t` is dropped, nothing reaches `guard`
                return Err(DbError::Sqlx(sqlx::Error::Protocol(format!(
                    "duplicate entry '{}' for key 'Tracks.name'",
                    track.name.as_str()
                ))));
            }
            let track_id = t.next_id();
            t.tracks.push(Track {
                track_id,
                name: track.name.as_str().to_owned(),
                duration_seconds: track.duration_seconds,
            });
            t.album_tracks.push((album_id, track_id, track.is_bonus_track));
        }

        *guard = t;
        Ok(album_id)
    }

    async fn album_details(&self, fragment: &str) -> Result<Vec<AlbumDetail>, DbError> {
        self.enter()?;
        let t = self.tables.lock().unwrap();
        let details = Self::matching(&t.albums, fragment, |a| a.name.as_str())
            .into_iter()
            .map(|album| {
                let artist = t
                    .artists
                    .iter()
                    .filter(|a| t.album_artists.contains(&(album.album_id, a.artist_id)))
                    .cloned()
                    .collect();
                let tracks = t
                    .tracks
                    .iter()
                    .filter(|tr| {
                        t.album_tracks
                            .iter()
                            .any(|(al, id, _)| *al == album.album_id && *id == tr.track_id)
                    })
                    .cloned()
                    .collect();
                AlbumDetail {
                    album,
                    artist,
                    tracks,
                }
            })
            .collect();
        Ok(details)
    }

    async fn ping(&self) -> Result<(), DbError> {
        self.enter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn failed_create_leaves_tables_untouched() {
        let catalog = MemoryCatalog::failing_on_track("bad");
        catalog
            .create_album(&sample_album("X", "Z", &["good", "bad"]))
            .await
            .unwrap_err();
        assert_eq!(catalog.row_counts(), RowCounts::default());
    }

    #[test]
    fn unique_names_differ() {
        assert_ne!(unique_name("a"), unique_name("a"));
    }
}
