//! Playhouse Storage
//!
//! `SQLite` persistence layer for the Playhouse studio backend.
//!
//! # Architecture
//!
//! - **Vertical Slicing**: each entity module owns its own queries
//! - **Embedded Migrations**: the schema ships inside the binary via
//!   `sqlx::migrate!`
//! - **Two Contexts**: [`SqliteStorage`] for production and
//!   [`MemoryStorage`] for tests, both implementing
//!   `playhouse_core::StorageContext`
//!
//! # Example
//!
//! ```rust,no_run
//! use playhouse_core::storage::StorageContext;
//! use playhouse_storage::{create_pool, run_migrations, SqliteStorage};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool("sqlite://playhouse.db").await?;
//! run_migrations(&pool).await?;
//!
//! let storage = SqliteStorage::new(pool);
//! let artists = storage.list_artists().await?;
//! # Ok(())
//! # }
//! ```

mod context;
mod error;
mod memory;

// Vertical slices
pub mod about;
pub mod artists;
pub mod bookings;
pub mod portfolio;
pub mod sessions;
pub mod users;

pub use context::SqliteStorage;
pub use error::StorageError;
pub use memory::MemoryStorage;

use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;

// Embed migrations into binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Run database migrations
///
/// This should be called once when the application starts to ensure
/// the database schema is up to date.
///
/// # Errors
///
/// Returns an error if migrations fail to run
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), StorageError> {
    MIGRATOR
        .run(pool)
        .await
        .map_err(|err| StorageError::Migration(err.to_string()))
}

/// Create a new `SQLite` pool
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `<sqlite://playhouse.db>`)
///
/// # Errors
///
/// Returns an error if the connection fails
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    // Parse the URL into options so we can configure SQLite behavior
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true) // Create database file if it doesn't exist
        .journal_mode(SqliteJournalMode::Wal) // Use WAL mode for better concurrency
        .busy_timeout(std::time::Duration::from_secs(30)); // Wait up to 30s for locks

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    Ok(pool)
}
