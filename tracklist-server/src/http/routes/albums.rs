//! Album endpoints: full listing, creation and detail lookup

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::{Album, AlbumDetail, AlbumDraft, NewAlbum, NewArtist, NewTrack, ValidationError};

const CREATED_MESSAGE: &str = "Album, artist, and tracks created successfully!";

/// Create album request
#[derive(Debug, Deserialize)]
pub struct CreateAlbumRequest {
    pub artist: ArtistInput,
    pub album: AlbumInput,
    pub tracks: Vec<TrackInput>,
}

/// Artist part of the create request
#[derive(Debug, Deserialize)]
pub struct ArtistInput {
    pub name: String,
    pub country: Option<String>,
}

/// Album part of the create request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlbumInput {
    pub name: String,
    pub release_date: Option<String>,
    #[serde(rename = "type")]
    pub album_type: Option<String>,
}

/// One track of the create request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackInput {
    pub name: String,
    /// Seconds
    pub duration: Option<i64>,
    pub is_bonus_track: Option<bool>,
}

impl CreateAlbumRequest {
    /// Check every field before anything touches the store.
    pub fn validate(self) -> Result<NewAlbum, ValidationError> {
        let artist = NewArtist::new(&self.artist.name, self.artist.country)?;
        let album = AlbumDraft::new(
            &self.album.name,
            self.album.release_date.as_deref(),
            self.album.album_type,
        )?;
        let tracks = self
            .tracks
            .into_iter()
            .enumerate()
            .map(|(i, t)| {
                NewTrack::new(&t.name, t.duration, t.is_bonus_track).map_err(|e| e.in_track(i))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(NewAlbum {
            artist,
            album,
            tracks,
        })
    }
}

/// Create album response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAlbumResponse {
    pub message: &'static str,
    pub album_id: i64,
}

/// GET /albums - every album, unpaginated
async fn list_albums(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Album>>, ApiError> {
    Ok(Json(state.catalog.list_albums().await?))
}

/// POST /api/albums - create artist (if new), album and tracks in one transaction
async fn create_album(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateAlbumRequest>,
) -> Result<(StatusCode, Json<CreateAlbumResponse>), ApiError> {
    let new = req.validate()?;
    let album_id = state.catalog.create_album(&new).await?;

    tracing::info!(
        album_id,
        album = new.album.name.as_str(),
        artist = new.artist.name.as_str(),
        tracks = new.tracks.len(),
        "album created"
    );

    Ok((
        StatusCode::CREATED,
        Json(CreateAlbumResponse {
            message: CREATED_MESSAGE,
            album_id,
        }),
    ))
}

/// GET /api/albums/{name} - matching albums with their artists and tracks
async fn get_album_details(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<Vec<AlbumDetail>>, ApiError> {
    let details = state.catalog.album_details(&name).await?;
    if details.is_empty() {
        return Err(ApiError::NotFound {
            message: "Album not found",
        });
    }
    Ok(Json(details))
}

/// Album routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/albums", get(list_albums))
        .route("/api/albums", post(create_album))
        .route("/api/albums/{name}", get(get_album_details))
}
