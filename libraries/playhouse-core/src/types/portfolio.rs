//! Portfolio item types

use super::artist::ArtistId;
use serde::{Deserialize, Serialize};

pub type PortfolioItemId = i64;

/// A single portfolio image owned by exactly one artist
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioItem {
    pub id: PortfolioItemId,
    pub artist_id: ArtistId,
    pub image_url: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub created_at: String,
}

/// Data for adding a portfolio item
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePortfolioItem {
    pub artist_id: ArtistId,
    pub image_url: String,
    pub title: Option<String>,
    pub description: Option<String>,
}
