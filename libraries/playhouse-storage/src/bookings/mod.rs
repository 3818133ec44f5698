//! Booking queries
//!
//! Bookings are write-once rows; nothing here updates or deletes them.

use playhouse_core::{error::Result, types::*, PlayhouseError};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

fn booking_from_row(row: &SqliteRow) -> Booking {
    Booking {
        id: row.get("id"),
        name: row.get("name"),
        email: row.get("email"),
        artist_id: row.get("artist_id"),
        message: row.get("message"),
        date: row.get("date"),
        created_at: row.get("created_at"),
    }
}

/// Record a booking request
pub async fn create(pool: &SqlitePool, booking: CreateBooking) -> Result<Booking> {
    let result = sqlx::query(
        "INSERT INTO bookings (name, email, artist_id, message, date, created_at)
         VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(&booking.name)
    .bind(&booking.email)
    .bind(booking.artist_id)
    .bind(&booking.message)
    .bind(&booking.date)
    .bind(now_rfc3339())
    .execute(pool)
    .await?;

    let id = result.last_insert_rowid();

    get_by_id(pool, id)
        .await?
        .ok_or_else(|| PlayhouseError::storage("Failed to retrieve created booking"))
}

/// Get booking by ID
pub async fn get_by_id(pool: &SqlitePool, id: BookingId) -> Result<Option<Booking>> {
    let row = sqlx::query(
        "SELECT id, name, email, artist_id, message, date, created_at
         FROM bookings
         WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.as_ref().map(booking_from_row))
}

/// Get all bookings, oldest first
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<Booking>> {
    let rows = sqlx::query(
        "SELECT id, name, email, artist_id, message, date, created_at
         FROM bookings
         ORDER BY id",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(booking_from_row).collect())
}
