//! Name search endpoints
//!
//! Every search is a substring match on the `name` column. Results are
//! returned whole; any store failure turns the whole response into a 500.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;

use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::{Album, Artist, Track};

/// Combined search response
#[derive(Debug, Serialize)]
pub struct SearchResults {
    pub albums: Vec<Album>,
    pub artists: Vec<Artist>,
    pub tracks: Vec<Track>,
}

/// GET /api/search/album/{name}
async fn search_albums(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<Vec<Album>>, ApiError> {
    tracing::debug!(fragment = %name, "searching albums");
    Ok(Json(state.catalog.search_albums(&name).await?))
}

/// GET /api/search/artist/{name}
async fn search_artists(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<Vec<Artist>>, ApiError> {
    tracing::debug!(fragment = %name, "searching artists");
    Ok(Json(state.catalog.search_artists(&name).await?))
}

/// GET /api/search/track/{name}
async fn search_tracks(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<Vec<Track>>, ApiError> {
    tracing::debug!(fragment = %name, "searching tracks");
    Ok(Json(state.catalog.search_tracks(&name).await?))
}

/// GET /api/search/{query} - albums, artists and tracks at once
async fn search_all(
    State(state): State<Arc<AppState>>,
    Path(query): Path<String>,
) -> Result<Json<SearchResults>, ApiError> {
    tracing::debug!(fragment = %query, "searching all tables");
    let catalog = &state.catalog;
    let (albums, artists, tracks) = tokio::try_join!(
        catalog.search_albums(&query),
        catalog.search_artists(&query),
        catalog.search_tracks(&query),
    )?;

    Ok(Json(SearchResults {
        albums,
        artists,
        tracks,
    }))
}

/// Search routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/search/album/{name}", get(search_albums))
        .route("/api/search/artist/{name}", get(search_artists))
        .route("/api/search/track/{name}", get(search_tracks))
        .route("/api/search/{query}", get(search_all))
}

#[cfg(test)]
mod tests {
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::db::Catalog;
    use crate::http::{build_router, ServerConfig};
    use crate::testing::{sample_album, MemoryCatalog};

    async fn seeded() -> Arc<MemoryCatalog> {
        let catalog = Arc::new(MemoryCatalog::new());
        catalog
            .create_album(&sample_album("Radiohead", "Kid A", &["Idioteque", "Kid A"]))
            .await
            .unwrap();
        catalog
            .create_album(&sample_album("Portishead", "Dummy", &["Roads"]))
            .await
            .unwrap();
        catalog
    }

    async fn get_json(catalog: Arc<MemoryCatalog>, uri: &str) -> (StatusCode, Value) {
        let app = build_router(AppState::new(catalog), &ServerConfig::default());
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    async fn get_text(catalog: Arc<MemoryCatalog>, uri: &str) -> (StatusCode, String) {
        let app = build_router(AppState::new(catalog), &ServerConfig::default());
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    fn names(value: &Value) -> Vec<&str> {
        value
            .as_array()
            .unwrap()
            .iter()
            .map(|row| row["name"].as_str().unwrap())
            .collect()
    }

    #[tokio::test]
    async fn album_search_matches_substring() {
        let (status, body) = get_json(seeded().await, "/api/search/album/id").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(names(&body), ["Kid A"]);
        assert_eq!(body[0]["release_date"], "2020-01-01");
        assert_eq!(body[0]["album_type"], "LP");
    }

    #[tokio::test]
    async fn artist_search_matches_substring() {
        let (status, body) = get_json(seeded().await, "/api/search/artist/head").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(names(&body), ["Radiohead", "Portishead"]);
    }

    #[tokio::test]
    async fn track_search_with_no_match_is_empty_array() {
        let (status, body) = get_json(seeded().await, "/api/search/track/zzz").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn path_fragment_is_percent_decoded() {
        let (status, body) = get_json(seeded().await, "/api/search/album/Kid%20A").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(names(&body), ["Kid A"]);
    }

    #[tokio::test]
    async fn combined_search_equals_single_searches() {
        let catalog = seeded().await;
        let (status, combined) = get_json(catalog.clone(), "/api/search/Kid").await;
        assert_eq!(status, StatusCode::OK);

        let (_, albums) = get_json(catalog.clone(), "/api/search/album/Kid").await;
        let (_, artists) = get_json(catalog.clone(), "/api/search/artist/Kid").await;
        let (_, tracks) = get_json(catalog, "/api/search/track/Kid").await;

        assert_eq!(combined["albums"], albums);
        assert_eq!(combined["artists"], artists);
        assert_eq!(combined["tracks"], tracks);
        assert_eq!(names(&combined["tracks"]), ["Kid A"]);
    }

    #[tokio::test]
    async fn combined_search_does_not_shadow_single_searches() {
        // "album" as a combined query would return an object, not an array
        let (_, body) = get_json(seeded().await, "/api/search/album/Dummy").await;
        assert!(body.is_array());
    }

    #[tokio::test]
    async fn store_failure_is_500() {
        let catalog = Arc::new(MemoryCatalog::unavailable());
        for uri in [
            "/api/search/album/x",
            "/api/search/artist/x",
            "/api/search/track/x",
            "/api/search/x",
        ] {
            let (status, body) = get_text(catalog.clone(), uri).await;
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{uri}");
            assert_eq!(body, "Internal Server Error", "{uri}");
        }
    }
}
