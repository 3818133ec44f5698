/// Booking request API routes
use crate::{
    error::{Result, ServerError},
    state::AppState,
};
use axum::{extract::State, http::StatusCode, Json};
use chrono::DateTime;
use playhouse_core::types::{Booking, CreateBooking};
use serde::Deserialize;

/// Booking form payload
///
/// Fields are optional here so absence produces our 400 response instead
/// of a deserialization rejection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub artist_id: Option<i64>,
    pub message: Option<String>,
    pub date: Option<String>,
}

fn non_empty(field: Option<String>) -> Option<String> {
    field
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// POST /api/book - Record a booking request
pub async fn create_booking(
    State(state): State<AppState>,
    Json(req): Json<BookingRequest>,
) -> Result<(StatusCode, Json<Booking>)> {
    let (Some(name), Some(email), Some(artist_id), Some(message), Some(date)) = (
        non_empty(req.name),
        non_empty(req.email),
        req.artist_id,
        non_empty(req.message),
        non_empty(req.date),
    ) else {
        return Err(ServerError::BadRequest(
            "Missing required booking fields".to_string(),
        ));
    };

    if !email.contains('@') {
        return Err(ServerError::BadRequest(
            "Invalid email address".to_string(),
        ));
    }

    if DateTime::parse_from_rfc3339(&date).is_err() {
        return Err(ServerError::BadRequest(
            "Invalid booking date".to_string(),
        ));
    }

    // Checked here so an unknown artist is a clean 400, not a constraint error
    if state.storage.get_artist(artist_id).await?.is_none() {
        return Err(ServerError::BadRequest("Artist not found".to_string()));
    }

    let booking = state
        .storage
        .create_booking(CreateBooking {
            name,
            email,
            artist_id,
            message,
            date,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(booking)))
}
