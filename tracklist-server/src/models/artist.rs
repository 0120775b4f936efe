//! Artist rows and creation input

use serde::Serialize;
use sqlx::FromRow;

use super::name::{optional_text, MAX_NAME_LEN};
use super::{EntityName, ValidationError};

/// Artist record from the Artists table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Artist {
    pub artist_id: i64,
    pub name: String,
    pub country: Option<String>,
}

/// Validated artist for album creation.
///
/// Matched against existing rows by exact name; `country` is only used when
/// a new row has to be inserted.
#[derive(Debug, Clone)]
pub struct NewArtist {
    pub name: EntityName,
    pub country: Option<String>,
}

impl NewArtist {
    pub fn new(name: &str, country: Option<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: EntityName::new("artist name", name)?,
            country: optional_text("artist country", country, MAX_NAME_LEN)?,
        })
    }
}
