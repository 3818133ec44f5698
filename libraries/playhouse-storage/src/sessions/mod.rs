//! Session queries
//!
//! Sessions back the HTTP-only login cookie. The token is the primary
//! key; deleting the row is how logout revokes a cookie that is still
//! within its expiry window.

use crate::StorageError;
use playhouse_core::types::{now_rfc3339, Session, UserId};
use sqlx::{Row, SqlitePool};

type Result<T> = std::result::Result<T, StorageError>;

/// Record a new session
///
/// `expires_at` must be RFC 3339 UTC with second precision (the format
/// produced by `now_rfc3339`) so textual comparison in
/// [`delete_expired`] stays chronological.
pub async fn create(
    pool: &SqlitePool,
    token: &str,
    user_id: UserId,
    expires_at: &str,
) -> Result<()> {
    sqlx::query(
        "INSERT INTO sessions (token, user_id, created_at, expires_at)
         VALUES (?, ?, ?, ?)",
    )
    .bind(token)
    .bind(user_id)
    .bind(now_rfc3339())
    .bind(expires_at)
    .execute(pool)
    .await?;

    Ok(())
}

/// Get session by token
pub async fn get(pool: &SqlitePool, token: &str) -> Result<Option<Session>> {
    let row = sqlx::query(
        "SELECT token, user_id, created_at, expires_at
         FROM sessions
         WHERE token = ?",
    )
    .bind(token)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|row| Session {
        token: row.get("token"),
        user_id: row.get("user_id"),
        created_at: row.get("created_at"),
        expires_at: row.get("expires_at"),
    }))
}

/// Delete a session; deleting an unknown token is a no-op
pub async fn delete(pool: &SqlitePool, token: &str) -> Result<()> {
    sqlx::query("DELETE FROM sessions WHERE token = ?")
        .bind(token)
        .execute(pool)
        .await?;

    Ok(())
}

/// Remove sessions whose expiry has passed, returning how many went
pub async fn delete_expired(pool: &SqlitePool) -> Result<u64> {
    let result = sqlx::query("DELETE FROM sessions WHERE expires_at <= ?")
        .bind(now_rfc3339())
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}
