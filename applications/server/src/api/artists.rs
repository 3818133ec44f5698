/// Public artist API routes
use crate::{
    error::{Result, ServerError},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    Json,
};
use playhouse_core::types::Artist;

/// GET /api/artists - All artists with their portfolios
pub async fn list_artists(State(state): State<AppState>) -> Result<Json<Vec<Artist>>> {
    let artists = state.storage.list_artists().await?;
    Ok(Json(artists))
}

/// GET /api/artists/:slug - One artist or 404
pub async fn get_artist(
    Path(slug): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Artist>> {
    let artist = state
        .storage
        .get_artist_by_slug(&slug)
        .await?
        .ok_or_else(|| ServerError::NotFound("Artist not found".to_string()))?;
    Ok(Json(artist))
}
