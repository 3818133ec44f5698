//! Booking request types

use super::artist::ArtistId;
use serde::{Deserialize, Serialize};

pub type BookingId = i64;

/// A booking request submitted through the public form
///
/// Bookings are write-once: created by the booking endpoint, never
/// updated or deleted through the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: BookingId,
    pub name: String,
    pub email: String,
    pub artist_id: ArtistId,
    pub message: String,
    /// Requested appointment time (RFC 3339)
    pub date: String,
    pub created_at: String,
}

/// Data for creating a booking
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBooking {
    pub name: String,
    pub email: String,
    pub artist_id: ArtistId,
    pub message: String,
    pub date: String,
}
