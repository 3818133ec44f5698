//! Storage contract for the Playhouse backend

use crate::error::Result;
use crate::types::{
    AboutContent, Artist, ArtistId, Booking, CreateArtist, CreateBooking, CreatePortfolioItem,
    CreateUser, PortfolioItem, PortfolioItemId, Session, UpdateAboutContent, UpdateArtist, User,
    UserId,
};
use async_trait::async_trait;

/// Storage context providing access to persistence operations
///
/// This trait abstracts the persistence layer so the HTTP server can run
/// against `SQLite` in production and an in-memory store in tests.
#[async_trait]
pub trait StorageContext: Send + Sync {
    // ========================================================================
    // Artists
    // ========================================================================

    /// Get all artists with their portfolio items attached, oldest first
    async fn list_artists(&self) -> Result<Vec<Artist>>;

    /// Get artist by ID
    async fn get_artist(&self, id: ArtistId) -> Result<Option<Artist>>;

    /// Get artist by slug
    async fn get_artist_by_slug(&self, slug: &str) -> Result<Option<Artist>>;

    /// Create a new artist
    async fn create_artist(&self, artist: CreateArtist) -> Result<Artist>;

    /// Merge-update an artist profile
    async fn update_artist(&self, id: ArtistId, update: UpdateArtist) -> Result<Artist>;

    /// Replace an artist's profile image URL
    async fn set_artist_profile_image(&self, id: ArtistId, image_url: &str) -> Result<Artist>;

    // ========================================================================
    // Portfolio items
    // ========================================================================

    /// Add a portfolio item to an artist
    async fn add_portfolio_item(&self, item: CreatePortfolioItem) -> Result<PortfolioItem>;

    /// Get portfolio item by ID
    async fn get_portfolio_item(&self, id: PortfolioItemId) -> Result<Option<PortfolioItem>>;

    /// Delete a portfolio item
    async fn delete_portfolio_item(&self, id: PortfolioItemId) -> Result<()>;

    // ========================================================================
    // Bookings
    // ========================================================================

    /// Record a booking request
    async fn create_booking(&self, booking: CreateBooking) -> Result<Booking>;

    /// Get all bookings, oldest first
    async fn list_bookings(&self) -> Result<Vec<Booking>>;

    // ========================================================================
    // About content
    // ========================================================================

    /// Get the about-page content
    async fn get_about(&self) -> Result<AboutContent>;

    /// Merge-update the about-page content
    async fn update_about(&self, update: UpdateAboutContent) -> Result<AboutContent>;

    // ========================================================================
    // Users & credentials
    // ========================================================================

    /// Create a user account
    async fn create_user(&self, user: CreateUser) -> Result<User>;

    /// Get user by ID
    async fn get_user(&self, id: UserId) -> Result<Option<User>>;

    /// Find user by username
    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>>;

    /// Get all users
    async fn list_users(&self) -> Result<Vec<User>>;

    /// Store a user's password hash, replacing any previous one
    async fn set_password_hash(&self, user_id: UserId, password_hash: &str) -> Result<()>;

    /// Get a user's password hash
    async fn get_password_hash(&self, user_id: UserId) -> Result<Option<String>>;

    // ========================================================================
    // Sessions
    // ========================================================================

    /// Record a new session
    async fn create_session(&self, token: &str, user_id: UserId, expires_at: &str) -> Result<()>;

    /// Get a live session by token; expired sessions are treated as absent
    async fn get_session(&self, token: &str) -> Result<Option<Session>>;

    /// Delete a session (logout)
    async fn delete_session(&self, token: &str) -> Result<()>;

    /// Remove sessions whose expiry has passed, returning how many went
    async fn delete_expired_sessions(&self) -> Result<u64>;
}
