//! Artist types

use super::portfolio::PortfolioItem;
use serde::{Deserialize, Serialize};

pub type ArtistId = i64;

/// A studio artist with their portfolio attached
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
    pub id: ArtistId,
    pub name: String,
    /// URL-safe identifier, unique and immutable after creation
    pub slug: String,
    pub bio: String,
    /// Ordered list of specialty labels
    pub specialties: Vec<String>,
    pub profile_image: Option<String>,
    pub instagram: Option<String>,
    pub experience: Option<String>,
    pub style: Option<String>,
    pub created_at: String,
    pub updated_at: String,
    /// Portfolio items in insertion order
    pub portfolio_items: Vec<PortfolioItem>,
}

/// Data for creating a new artist
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateArtist {
    pub name: String,
    pub slug: String,
    pub bio: String,
    pub specialties: Vec<String>,
    pub profile_image: Option<String>,
    pub instagram: Option<String>,
    pub experience: Option<String>,
    pub style: Option<String>,
}

/// Partial update of an artist profile
///
/// `None` fields are left unchanged; there is no way to clear a field
/// back to null through this type.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateArtist {
    pub bio: Option<String>,
    pub specialties: Option<Vec<String>>,
    pub instagram: Option<String>,
    pub experience: Option<String>,
    pub style: Option<String>,
}
