//! Track rows and creation input

use serde::Serialize;
use sqlx::FromRow;

use super::{EntityName, ValidationError};

/// Track record from the Tracks table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Track {
    pub track_id: i64,
    pub name: String,
    pub duration_seconds: Option<i64>,
}

/// Validated track for album creation
#[derive(Debug, Clone)]
pub struct NewTrack {
    pub name: EntityName,
    pub duration_seconds: Option<i64>,
    pub is_bonus_track: bool,
}

impl NewTrack {
    /// A missing bonus flag means a regular track.
    pub fn new(
        name: &str,
        duration_seconds: Option<i64>,
        is_bonus_track: Option<bool>,
    ) -> Result<Self, ValidationError> {
        let name = EntityName::new("track name", name)?;
        if duration_seconds.is_some_and(|d| d < 0) {
            return Err(ValidationError::Negative {
                field: "track duration",
            });
        }

        Ok(Self {
            name,
            duration_seconds,
            is_bonus_track: is_bonus_track.unwrap_or(false),
        })
    }
}
