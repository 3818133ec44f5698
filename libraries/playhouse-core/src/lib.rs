//! Playhouse Core
//!
//! Domain types, error handling, and the storage contract for the
//! Playhouse tattoo studio backend.
//!
//! This crate provides the foundational building blocks shared by the
//! storage layer and the HTTP server.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Artist`, `PortfolioItem`, `Booking`, `User`, `AboutContent`
//! - **Storage Contract**: the [`StorageContext`] trait implemented by the
//!   `SQLite` and in-memory backends
//! - **Error Handling**: unified [`PlayhouseError`] and [`Result`] types
//!
//! # Example
//!
//! ```rust
//! use playhouse_core::types::CreateArtist;
//!
//! let artist = CreateArtist {
//!     name: "Mila".to_string(),
//!     slug: "mila".to_string(),
//!     bio: "Specializing in fine line work".to_string(),
//!     specialties: vec!["Fine Line".to_string()],
//!     profile_image: None,
//!     instagram: None,
//!     experience: None,
//!     style: None,
//! };
//! assert_eq!(artist.slug, "mila");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod storage;
pub mod types;

// Re-export commonly used types
pub use error::{PlayhouseError, Result};
pub use storage::StorageContext;

// Export all types
pub use types::{
    AboutContent, Artist, ArtistId, Booking, BookingId, CreateArtist, CreateBooking,
    CreatePortfolioItem, CreateUser, PortfolioItem, PortfolioItemId, Role, Session,
    UpdateAboutContent, UpdateArtist, User, UserId, ValueCard,
};
