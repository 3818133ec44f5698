/// Admin API routes
///
/// Everything here sits behind the admin-session middleware; handlers can
/// assume the caller holds an admin session.
use crate::{
    error::{Result, ServerError},
    state::AppState,
};
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    Json,
};
use playhouse_core::types::{
    AboutContent, Artist, CreatePortfolioItem, PortfolioItem, UpdateAboutContent, UpdateArtist,
    ValueCard,
};
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateArtistRequest {
    pub bio: Option<String>,
    pub specialties: Option<Vec<String>>,
    pub instagram: Option<String>,
    pub experience: Option<String>,
    pub style: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAboutRequest {
    pub story: Option<String>,
    pub space: Option<String>,
    pub philosophy: Option<String>,
    pub value_cards: Option<Vec<ValueCard>>,
}

/// PATCH /api/admin/artists/:id
/// Merge-update an artist's profile text fields
pub async fn update_artist(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(req): Json<UpdateArtistRequest>,
) -> Result<Json<Artist>> {
    let artist = state
        .storage
        .update_artist(
            id,
            UpdateArtist {
                bio: req.bio,
                specialties: req.specialties,
                instagram: req.instagram,
                experience: req.experience,
                style: req.style,
            },
        )
        .await?;

    Ok(Json(artist))
}

/// POST /api/admin/artists/:id/profile-image
/// Replace an artist's profile image from a multipart `image` field
pub async fn upload_profile_image(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<Artist>> {
    let artist = state
        .storage
        .get_artist(id)
        .await?
        .ok_or_else(|| ServerError::NotFound("Artist not found".to_string()))?;

    let form = parse_upload_form(&headers, body).await?;
    let [data] = form.files.as_slice() else {
        return Err(ServerError::BadRequest(
            "Expected exactly one image file".to_string(),
        ));
    };

    let image_url = state.images.store(data).await?;
    let updated = state.storage.set_artist_profile_image(id, &image_url).await?;

    // The replaced image is unreachable now; drop it from disk
    if let Some(previous) = artist.profile_image {
        state.images.remove(&previous).await;
    }

    Ok(Json(updated))
}

/// POST /api/admin/artists/:id/portfolio
/// Add portfolio images from multipart `image`/`images` fields
///
/// Files are processed in order; the first failure aborts the request.
pub async fn upload_portfolio_images(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<Vec<PortfolioItem>>)> {
    if state.storage.get_artist(id).await?.is_none() {
        return Err(ServerError::NotFound("Artist not found".to_string()));
    }

    let form = parse_upload_form(&headers, body).await?;
    if form.files.is_empty() {
        return Err(ServerError::BadRequest(
            "No image file provided".to_string(),
        ));
    }

    let mut items = Vec::with_capacity(form.files.len());
    for data in &form.files {
        let image_url = state.images.store(data).await?;
        let item = state
            .storage
            .add_portfolio_item(CreatePortfolioItem {
                artist_id: id,
                image_url,
                title: form.title.clone(),
                description: form.description.clone(),
            })
            .await?;
        items.push(item);
    }

    Ok((StatusCode::CREATED, Json(items)))
}

/// DELETE /api/admin/portfolio/:id
/// Remove a portfolio item and its stored image
pub async fn delete_portfolio_item(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>> {
    let item = state
        .storage
        .get_portfolio_item(id)
        .await?
        .ok_or_else(|| ServerError::NotFound("Portfolio item not found".to_string()))?;

    state.storage.delete_portfolio_item(id).await?;
    state.images.remove(&item.image_url).await;

    Ok(Json(json!({ "success": true })))
}

/// PATCH /api/admin/about
/// Merge-update the about-page content
pub async fn update_about(
    State(state): State<AppState>,
    Json(req): Json<UpdateAboutRequest>,
) -> Result<Json<AboutContent>> {
    let about = state
        .storage
        .update_about(UpdateAboutContent {
            story: req.story,
            space: req.space,
            philosophy: req.philosophy,
            value_cards: req.value_cards,
        })
        .await?;

    Ok(Json(about))
}

/// Parsed multipart upload: image payloads plus optional text fields
struct UploadForm {
    files: Vec<Vec<u8>>,
    title: Option<String>,
    description: Option<String>,
}

async fn parse_upload_form(headers: &HeaderMap, body: Bytes) -> Result<UploadForm> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| ServerError::BadRequest("Missing Content-Type".to_string()))?;

    if !content_type.starts_with("multipart/form-data") {
        return Err(ServerError::BadRequest(
            "Expected multipart/form-data".to_string(),
        ));
    }

    let boundary = content_type
        .split("boundary=")
        .nth(1)
        .ok_or_else(|| ServerError::BadRequest("Missing boundary".to_string()))?
        .to_string();

    // Convert Bytes to a stream for multer
    let stream = futures_util::stream::once(async move { Ok::<_, std::io::Error>(body) });
    let mut multipart = multer::Multipart::new(stream, boundary);

    let mut form = UploadForm {
        files: Vec::new(),
        title: None,
        description: None,
    };

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ServerError::BadRequest(format!("Failed to parse multipart: {}", e)))?
    {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "image" | "images" => {
                let data = field.bytes().await.map_err(|e| {
                    ServerError::BadRequest(format!("Failed to read file: {}", e))
                })?;
                form.files.push(data.to_vec());
            }
            "title" => {
                form.title = Some(field.text().await.map_err(|e| {
                    ServerError::BadRequest(format!("Failed to read title: {}", e))
                })?);
            }
            "description" => {
                form.description = Some(field.text().await.map_err(|e| {
                    ServerError::BadRequest(format!("Failed to read description: {}", e))
                })?);
            }
            _ => {}
        }
    }

    Ok(form)
}
