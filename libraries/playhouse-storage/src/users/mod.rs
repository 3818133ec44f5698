//! User account and credential queries

use playhouse_core::{error::Result, types::*, PlayhouseError};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

fn user_from_row(row: &SqliteRow) -> Result<User> {
    let role: String = row.get("role");

    Ok(User {
        id: row.get("id"),
        username: row.get("username"),
        role: role.parse()?,
        created_at: row.get("created_at"),
    })
}

/// Create a user account
///
/// Usernames are unique; a taken username returns
/// `PlayhouseError::Duplicate`.
pub async fn create(pool: &SqlitePool, user: CreateUser) -> Result<User> {
    let result = sqlx::query("INSERT INTO users (username, role, created_at) VALUES (?, ?, ?)")
        .bind(&user.username)
        .bind(user.role.as_str())
        .bind(now_rfc3339())
        .execute(pool)
        .await
        .map_err(|err| map_unique_violation(err, &user.username))?;

    let id = result.last_insert_rowid();

    get_by_id(pool, id)
        .await?
        .ok_or_else(|| PlayhouseError::storage("Failed to retrieve created user"))
}

/// Get user by ID
pub async fn get_by_id(pool: &SqlitePool, id: UserId) -> Result<Option<User>> {
    let row = sqlx::query("SELECT id, username, role, created_at FROM users WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    row.as_ref().map(user_from_row).transpose()
}

/// Find user by username
pub async fn find_by_username(pool: &SqlitePool, username: &str) -> Result<Option<User>> {
    let row = sqlx::query("SELECT id, username, role, created_at FROM users WHERE username = ?")
        .bind(username)
        .fetch_optional(pool)
        .await?;

    row.as_ref().map(user_from_row).transpose()
}

/// Get all users, oldest first
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<User>> {
    let rows = sqlx::query("SELECT id, username, role, created_at FROM users ORDER BY id")
        .fetch_all(pool)
        .await?;

    rows.iter().map(user_from_row).collect()
}

/// Create or update user credentials
///
/// The hash should already be a bcrypt hash; this layer never sees
/// plaintext passwords.
pub async fn set_password_hash(
    pool: &SqlitePool,
    user_id: UserId,
    password_hash: &str,
) -> Result<()> {
    sqlx::query(
        "INSERT INTO user_credentials (user_id, password_hash, updated_at)
         VALUES (?, ?, ?)
         ON CONFLICT(user_id)
         DO UPDATE SET password_hash = excluded.password_hash, updated_at = excluded.updated_at",
    )
    .bind(user_id)
    .bind(password_hash)
    .bind(now_rfc3339())
    .execute(pool)
    .await?;

    Ok(())
}

/// Get user's password hash for authentication
///
/// Returns `None` if the user has no credentials set.
pub async fn get_password_hash(pool: &SqlitePool, user_id: UserId) -> Result<Option<String>> {
    let row = sqlx::query("SELECT password_hash FROM user_credentials WHERE user_id = ?")
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(|r| r.get("password_hash")))
}

fn map_unique_violation(err: sqlx::Error, username: &str) -> PlayhouseError {
    if err
        .as_database_error()
        .is_some_and(|db| db.is_unique_violation())
    {
        PlayhouseError::duplicate(format!("username already exists: {username}"))
    } else {
        err.into()
    }
}
