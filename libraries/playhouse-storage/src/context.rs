use crate::{about, artists, bookings, portfolio, sessions, users};
use async_trait::async_trait;
use playhouse_core::{error::Result, storage::StorageContext, types::*};
use sqlx::SqlitePool;

/// Production storage context backed by `SQLite`
pub struct SqliteStorage {
    pool: SqlitePool,
}

impl SqliteStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl StorageContext for SqliteStorage {
    // Artists
    async fn list_artists(&self) -> Result<Vec<Artist>> {
        artists::get_all(&self.pool).await
    }

    async fn get_artist(&self, id: ArtistId) -> Result<Option<Artist>> {
        artists::get_by_id(&self.pool, id).await
    }

    async fn get_artist_by_slug(&self, slug: &str) -> Result<Option<Artist>> {
        artists::get_by_slug(&self.pool, slug).await
    }

    async fn create_artist(&self, artist: CreateArtist) -> Result<Artist> {
        artists::create(&self.pool, artist).await
    }

    async fn update_artist(&self, id: ArtistId, update: UpdateArtist) -> Result<Artist> {
        artists::update(&self.pool, id, update).await
    }

    async fn set_artist_profile_image(&self, id: ArtistId, image_url: &str) -> Result<Artist> {
        artists::set_profile_image(&self.pool, id, image_url).await
    }

    // Portfolio items
    async fn add_portfolio_item(&self, item: CreatePortfolioItem) -> Result<PortfolioItem> {
        portfolio::add(&self.pool, item).await
    }

    async fn get_portfolio_item(&self, id: PortfolioItemId) -> Result<Option<PortfolioItem>> {
        portfolio::get_by_id(&self.pool, id).await
    }

    async fn delete_portfolio_item(&self, id: PortfolioItemId) -> Result<()> {
        portfolio::delete(&self.pool, id).await
    }

    // Bookings
    async fn create_booking(&self, booking: CreateBooking) -> Result<Booking> {
        bookings::create(&self.pool, booking).await
    }

    async fn list_bookings(&self) -> Result<Vec<Booking>> {
        bookings::get_all(&self.pool).await
    }

    // About content
    async fn get_about(&self) -> Result<AboutContent> {
        about::get(&self.pool).await
    }

    async fn update_about(&self, update: UpdateAboutContent) -> Result<AboutContent> {
        about::update(&self.pool, update).await
    }

    // Users & credentials
    async fn create_user(&self, user: CreateUser) -> Result<User> {
        users::create(&self.pool, user).await
    }

    async fn get_user(&self, id: UserId) -> Result<Option<User>> {
        users::get_by_id(&self.pool, id).await
    }

    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>> {
        users::find_by_username(&self.pool, username).await
    }

    async fn list_users(&self) -> Result<Vec<User>> {
        users::get_all(&self.pool).await
    }

    async fn set_password_hash(&self, user_id: UserId, password_hash: &str) -> Result<()> {
        users::set_password_hash(&self.pool, user_id, password_hash).await
    }

    async fn get_password_hash(&self, user_id: UserId) -> Result<Option<String>> {
        users::get_password_hash(&self.pool, user_id).await
    }

    // Sessions
    async fn create_session(&self, token: &str, user_id: UserId, expires_at: &str) -> Result<()> {
        Ok(sessions::create(&self.pool, token, user_id, expires_at).await?)
    }

    async fn get_session(&self, token: &str) -> Result<Option<Session>> {
        let Some(session) = sessions::get(&self.pool, token).await? else {
            return Ok(None);
        };

        if session.is_expired() {
            sessions::delete(&self.pool, token).await?;
            return Ok(None);
        }

        Ok(Some(session))
    }

    async fn delete_session(&self, token: &str) -> Result<()> {
        Ok(sessions::delete(&self.pool, token).await?)
    }

    async fn delete_expired_sessions(&self) -> Result<u64> {
        Ok(sessions::delete_expired(&self.pool).await?)
    }
}
