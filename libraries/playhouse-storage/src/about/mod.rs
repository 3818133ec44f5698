//! About-page content queries
//!
//! The content lives in a single row whose id is pinned to 1 by the
//! schema; the initial row is inserted by migration, so reads can assume
//! it exists.

use playhouse_core::{error::Result, types::*};
use sqlx::{Row, SqlitePool};

const ABOUT_ROW_ID: i64 = 1;

/// Get the about-page content
pub async fn get(pool: &SqlitePool) -> Result<AboutContent> {
    let row = sqlx::query(
        "SELECT story, space, philosophy, value_cards, updated_at
         FROM about_content
         WHERE id = ?",
    )
    .bind(ABOUT_ROW_ID)
    .fetch_one(pool)
    .await?;

    let value_cards: String = row.get("value_cards");

    Ok(AboutContent {
        story: row.get("story"),
        space: row.get("space"),
        philosophy: row.get("philosophy"),
        value_cards: serde_json::from_str(&value_cards)?,
        updated_at: row.get("updated_at"),
    })
}

/// Merge-update the about-page content; `None` fields are left unchanged
pub async fn update(pool: &SqlitePool, update: UpdateAboutContent) -> Result<AboutContent> {
    let value_cards = update
        .value_cards
        .as_ref()
        .map(|cards| serde_json::to_string(cards))
        .transpose()?;

    sqlx::query(
        "UPDATE about_content
         SET story = COALESCE(?, story),
             space = COALESCE(?, space),
             philosophy = COALESCE(?, philosophy),
             value_cards = COALESCE(?, value_cards),
             updated_at = ?
         WHERE id = ?",
    )
    .bind(&update.story)
    .bind(&update.space)
    .bind(&update.philosophy)
    .bind(&value_cards)
    .bind(now_rfc3339())
    .bind(ABOUT_ROW_ID)
    .execute(pool)
    .await?;

    get(pool).await
}
