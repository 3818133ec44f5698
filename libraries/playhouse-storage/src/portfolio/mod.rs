//! Portfolio item queries

use playhouse_core::{error::Result, types::*, PlayhouseError};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use std::collections::HashMap;

fn item_from_row(row: &SqliteRow) -> PortfolioItem {
    PortfolioItem {
        id: row.get("id"),
        artist_id: row.get("artist_id"),
        image_url: row.get("image_url"),
        title: row.get("title"),
        description: row.get("description"),
        created_at: row.get("created_at"),
    }
}

/// Get an artist's portfolio items in insertion order
pub async fn get_by_artist(pool: &SqlitePool, artist_id: ArtistId) -> Result<Vec<PortfolioItem>> {
    let rows = sqlx::query(
        "SELECT id, artist_id, image_url, title, description, created_at
         FROM portfolio_items
         WHERE artist_id = ?
         ORDER BY id",
    )
    .bind(artist_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(item_from_row).collect())
}

/// Get every portfolio item grouped by artist, items in insertion order
pub(crate) async fn get_all_grouped(
    pool: &SqlitePool,
) -> Result<HashMap<ArtistId, Vec<PortfolioItem>>> {
    let rows = sqlx::query(
        "SELECT id, artist_id, image_url, title, description, created_at
         FROM portfolio_items
         ORDER BY id",
    )
    .fetch_all(pool)
    .await?;

    let mut grouped: HashMap<ArtistId, Vec<PortfolioItem>> = HashMap::new();
    for row in &rows {
        let item = item_from_row(row);
        grouped.entry(item.artist_id).or_default().push(item);
    }

    Ok(grouped)
}

/// Get portfolio item by ID
pub async fn get_by_id(pool: &SqlitePool, id: PortfolioItemId) -> Result<Option<PortfolioItem>> {
    let row = sqlx::query(
        "SELECT id, artist_id, image_url, title, description, created_at
         FROM portfolio_items
         WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.as_ref().map(item_from_row))
}

/// Add a portfolio item to an artist
///
/// Referencing a missing artist returns `PlayhouseError::NotFound`.
pub async fn add(pool: &SqlitePool, item: CreatePortfolioItem) -> Result<PortfolioItem> {
    let result = sqlx::query(
        "INSERT INTO portfolio_items (artist_id, image_url, title, description, created_at)
         VALUES (?, ?, ?, ?, ?)",
    )
    .bind(item.artist_id)
    .bind(&item.image_url)
    .bind(&item.title)
    .bind(&item.description)
    .bind(now_rfc3339())
    .execute(pool)
    .await
    .map_err(|err| map_missing_artist(err, item.artist_id))?;

    let id = result.last_insert_rowid();

    get_by_id(pool, id)
        .await?
        .ok_or_else(|| PlayhouseError::storage("Failed to retrieve created portfolio item"))
}

/// Delete a portfolio item
pub async fn delete(pool: &SqlitePool, id: PortfolioItemId) -> Result<()> {
    let result = sqlx::query("DELETE FROM portfolio_items WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(PlayhouseError::not_found("Portfolio item", id));
    }

    Ok(())
}

fn map_missing_artist(err: sqlx::Error, artist_id: ArtistId) -> PlayhouseError {
    if err
        .as_database_error()
        .is_some_and(|db| db.is_foreign_key_violation())
    {
        PlayhouseError::not_found("Artist", artist_id)
    } else {
        err.into()
    }
}
