/// About-page content API routes
use crate::{error::Result, state::AppState};
use axum::{extract::State, Json};
use playhouse_core::types::AboutContent;

/// GET /api/about - Studio story, space, philosophy, and value cards
pub async fn get_about(State(state): State<AppState>) -> Result<Json<AboutContent>> {
    let about = state.storage.get_about().await?;
    Ok(Json(about))
}
