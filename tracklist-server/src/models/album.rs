//! Album rows, detail view and the validated creation payload

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;

use super::name::optional_text;
use super::{Artist, EntityName, NewArtist, NewTrack, Track, ValidationError};

/// Maximum length for the album type column
const MAX_ALBUM_TYPE_LEN: usize = 64;

/// Album record from the Albums table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Album {
    pub album_id: i64,
    pub name: String,
    pub release_date: Option<NaiveDate>,
    pub album_type: Option<String>,
}

/// Album with its associated artists and tracks.
///
/// Serializes as the album columns plus `artist` and `tracks` arrays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlbumDetail {
    #[serde(flatten)]
    pub album: Album,
    pub artist: Vec<Artist>,
    pub tracks: Vec<Track>,
}

/// Validated album columns for creation
#[derive(Debug, Clone)]
pub struct AlbumDraft {
    pub name: EntityName,
    pub release_date: Option<NaiveDate>,
    pub album_type: Option<String>,
}

impl AlbumDraft {
    /// `release_date` must be `YYYY-MM-DD` when present.
    pub fn new(
        name: &str,
        release_date: Option<&str>,
        album_type: Option<String>,
    ) -> Result<Self, ValidationError> {
        let name = EntityName::new("album name", name)?;
        let release_date = release_date
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(|d| {
                NaiveDate::parse_from_str(d, "%Y-%m-%d").map_err(|_| {
                    ValidationError::InvalidFormat {
                        field: "album release date",
                        reason: "expected YYYY-MM-DD",
                    }
                })
            })
            .transpose()?;
        let album_type = optional_text("album type", album_type, MAX_ALBUM_TYPE_LEN)?;

        Ok(Self {
            name,
            release_date,
            album_type,
        })
    }
}

/// Everything needed to create an album in one transaction.
///
/// Tracks keep their input order; duplicates are inserted as separate rows.
#[derive(Debug, Clone)]
pub struct NewAlbum {
    pub artist: NewArtist,
    pub album: AlbumDraft,
    pub tracks: Vec<NewTrack>,
}
