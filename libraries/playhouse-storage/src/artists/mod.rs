//! Artist queries
//!
//! Artists always come back with their portfolio items attached so the
//! public API can serve profiles in one shot.

use playhouse_core::{error::Result, types::*, PlayhouseError};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

use crate::portfolio;

fn artist_from_row(row: &SqliteRow) -> Result<Artist> {
    let specialties: String = row.get("specialties");

    Ok(Artist {
        id: row.get("id"),
        name: row.get("name"),
        slug: row.get("slug"),
        bio: row.get("bio"),
        specialties: serde_json::from_str(&specialties)?,
        profile_image: row.get("profile_image"),
        instagram: row.get("instagram"),
        experience: row.get("experience"),
        style: row.get("style"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
        portfolio_items: Vec::new(),
    })
}

/// Get all artists with portfolio items attached, oldest first
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<Artist>> {
    let rows = sqlx::query(
        "SELECT id, name, slug, bio, specialties, profile_image, instagram,
                experience, style, created_at, updated_at
         FROM artists
         ORDER BY id",
    )
    .fetch_all(pool)
    .await?;

    let mut artists = rows
        .iter()
        .map(artist_from_row)
        .collect::<Result<Vec<_>>>()?;

    let mut items = portfolio::get_all_grouped(pool).await?;
    for artist in &mut artists {
        if let Some(portfolio_items) = items.remove(&artist.id) {
            artist.portfolio_items = portfolio_items;
        }
    }

    Ok(artists)
}

/// Get artist by ID, with portfolio items attached
pub async fn get_by_id(pool: &SqlitePool, id: ArtistId) -> Result<Option<Artist>> {
    let row = sqlx::query(
        "SELECT id, name, slug, bio, specialties, profile_image, instagram,
                experience, style, created_at, updated_at
         FROM artists
         WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    let Some(row) = row else {
        return Ok(None);
    };

    let mut artist = artist_from_row(&row)?;
    artist.portfolio_items = portfolio::get_by_artist(pool, artist.id).await?;

    Ok(Some(artist))
}

/// Get artist by slug, with portfolio items attached
pub async fn get_by_slug(pool: &SqlitePool, slug: &str) -> Result<Option<Artist>> {
    let row = sqlx::query(
        "SELECT id, name, slug, bio, specialties, profile_image, instagram,
                experience, style, created_at, updated_at
         FROM artists
         WHERE slug = ?",
    )
    .bind(slug)
    .fetch_optional(pool)
    .await?;

    let Some(row) = row else {
        return Ok(None);
    };

    let mut artist = artist_from_row(&row)?;
    artist.portfolio_items = portfolio::get_by_artist(pool, artist.id).await?;

    Ok(Some(artist))
}

/// Create new artist
///
/// The slug is unique; inserting a taken slug returns
/// `PlayhouseError::Duplicate`.
pub async fn create(pool: &SqlitePool, artist: CreateArtist) -> Result<Artist> {
    let now = now_rfc3339();
    let specialties = serde_json::to_string(&artist.specialties)?;

    let result = sqlx::query(
        "INSERT INTO artists (name, slug, bio, specialties, profile_image, instagram,
                              experience, style, created_at, updated_at)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&artist.name)
    .bind(&artist.slug)
    .bind(&artist.bio)
    .bind(&specialties)
    .bind(&artist.profile_image)
    .bind(&artist.instagram)
    .bind(&artist.experience)
    .bind(&artist.style)
    .bind(&now)
    .bind(&now)
    .execute(pool)
    .await
    .map_err(|err| map_unique_violation(err, &artist.slug))?;

    let id = result.last_insert_rowid();

    get_by_id(pool, id)
        .await?
        .ok_or_else(|| PlayhouseError::storage("Failed to retrieve created artist"))
}

/// Merge-update an artist profile; `None` fields are left unchanged
pub async fn update(pool: &SqlitePool, id: ArtistId, update: UpdateArtist) -> Result<Artist> {
    let specialties = update
        .specialties
        .as_ref()
        .map(|list| serde_json::to_string(list))
        .transpose()?;

    let result = sqlx::query(
        "UPDATE artists
         SET bio = COALESCE(?, bio),
             specialties = COALESCE(?, specialties),
             instagram = COALESCE(?, instagram),
             experience = COALESCE(?, experience),
             style = COALESCE(?, style),
             updated_at = ?
         WHERE id = ?",
    )
    .bind(&update.bio)
    .bind(&specialties)
    .bind(&update.instagram)
    .bind(&update.experience)
    .bind(&update.style)
    .bind(now_rfc3339())
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(PlayhouseError::not_found("Artist", id));
    }

    get_by_id(pool, id)
        .await?
        .ok_or_else(|| PlayhouseError::storage("Failed to retrieve updated artist"))
}

/// Replace an artist's profile image URL
pub async fn set_profile_image(
    pool: &SqlitePool,
    id: ArtistId,
    image_url: &str,
) -> Result<Artist> {
    let result = sqlx::query("UPDATE artists SET profile_image = ?, updated_at = ? WHERE id = ?")
        .bind(image_url)
        .bind(now_rfc3339())
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(PlayhouseError::not_found("Artist", id));
    }

    get_by_id(pool, id)
        .await?
        .ok_or_else(|| PlayhouseError::storage("Failed to retrieve updated artist"))
}

fn map_unique_violation(err: sqlx::Error, slug: &str) -> PlayhouseError {
    if err
        .as_database_error()
        .is_some_and(|db| db.is_unique_violation())
    {
        PlayhouseError::duplicate(format!("artist slug already exists: {slug}"))
    } else {
        err.into()
    }
}
