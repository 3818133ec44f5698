//! In-memory storage context
//!
//! Implements the same contract as [`SqliteStorage`](crate::SqliteStorage)
//! entirely in process memory. Used by tests and available for ephemeral
//! runs where no database file is wanted.

use async_trait::async_trait;
use playhouse_core::{error::Result, storage::StorageContext, types::*, PlayhouseError};
use std::collections::{BTreeMap, HashMap};
use std::sync::{Mutex, MutexGuard};

/// Storage context holding everything in process memory
#[derive(Default)]
pub struct MemoryStorage {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    artists: BTreeMap<ArtistId, Artist>,
    portfolio: BTreeMap<PortfolioItemId, PortfolioItem>,
    bookings: BTreeMap<BookingId, Booking>,
    users: BTreeMap<UserId, User>,
    credentials: HashMap<UserId, String>,
    sessions: HashMap<String, Session>,
    about: Option<AboutContent>,
    next_artist_id: ArtistId,
    next_portfolio_id: PortfolioItemId,
    next_booking_id: BookingId,
    next_user_id: UserId,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner>> {
        self.inner
            .lock()
            .map_err(|_| PlayhouseError::storage("memory storage lock poisoned"))
    }
}

fn next_id(counter: &mut i64) -> i64 {
    *counter += 1;
    *counter
}

// Stored artists keep an empty portfolio vec; items are attached on read,
// mirroring the SQLite join.
fn attach_portfolio(inner: &Inner, artist: &Artist) -> Artist {
    let mut artist = artist.clone();
    artist.portfolio_items = inner
        .portfolio
        .values()
        .filter(|item| item.artist_id == artist.id)
        .cloned()
        .collect();
    artist
}

#[async_trait]
impl StorageContext for MemoryStorage {
    // Artists
    async fn list_artists(&self) -> Result<Vec<Artist>> {
        let inner = self.lock()?;
        Ok(inner
            .artists
            .values()
            .map(|artist| attach_portfolio(&inner, artist))
            .collect())
    }

    async fn get_artist(&self, id: ArtistId) -> Result<Option<Artist>> {
        let inner = self.lock()?;
        Ok(inner
            .artists
            .get(&id)
            .map(|artist| attach_portfolio(&inner, artist)))
    }

    async fn get_artist_by_slug(&self, slug: &str) -> Result<Option<Artist>> {
        let inner = self.lock()?;
        Ok(inner
            .artists
            .values()
            .find(|artist| artist.slug == slug)
            .map(|artist| attach_portfolio(&inner, artist)))
    }

    async fn create_artist(&self, artist: CreateArtist) -> Result<Artist> {
        let mut inner = self.lock()?;

        if inner.artists.values().any(|a| a.slug == artist.slug) {
            return Err(PlayhouseError::duplicate(format!(
                "artist slug already exists: {}",
                artist.slug
            )));
        }

        let id = next_id(&mut inner.next_artist_id);
        let now = now_rfc3339();
        let stored = Artist {
            id,
            name: artist.name,
            slug: artist.slug,
            bio: artist.bio,
            specialties: artist.specialties,
            profile_image: artist.profile_image,
            instagram: artist.instagram,
            experience: artist.experience,
            style: artist.style,
            created_at: now.clone(),
            updated_at: now,
            portfolio_items: Vec::new(),
        };
        inner.artists.insert(id, stored.clone());

        Ok(stored)
    }

    async fn update_artist(&self, id: ArtistId, update: UpdateArtist) -> Result<Artist> {
        let mut inner = self.lock()?;

        let Some(artist) = inner.artists.get_mut(&id) else {
            return Err(PlayhouseError::not_found("Artist", id));
        };

        if let Some(bio) = update.bio {
            artist.bio = bio;
        }
        if let Some(specialties) = update.specialties {
            artist.specialties = specialties;
        }
        if let Some(instagram) = update.instagram {
            artist.instagram = Some(instagram);
        }
        if let Some(experience) = update.experience {
            artist.experience = Some(experience);
        }
        if let Some(style) = update.style {
            artist.style = Some(style);
        }
        artist.updated_at = now_rfc3339();

        let updated = artist.clone();
        Ok(attach_portfolio(&inner, &updated))
    }

    async fn set_artist_profile_image(&self, id: ArtistId, image_url: &str) -> Result<Artist> {
        let mut inner = self.lock()?;

        let Some(artist) = inner.artists.get_mut(&id) else {
            return Err(PlayhouseError::not_found("Artist", id));
        };

        artist.profile_image = Some(image_url.to_string());
        artist.updated_at = now_rfc3339();

        let updated = artist.clone();
        Ok(attach_portfolio(&inner, &updated))
    }

    // Portfolio items
    async fn add_portfolio_item(&self, item: CreatePortfolioItem) -> Result<PortfolioItem> {
        let mut inner = self.lock()?;

        if !inner.artists.contains_key(&item.artist_id) {
            return Err(PlayhouseError::not_found("Artist", item.artist_id));
        }

        let id = next_id(&mut inner.next_portfolio_id);
        let stored = PortfolioItem {
            id,
            artist_id: item.artist_id,
            image_url: item.image_url,
            title: item.title,
            description: item.description,
            created_at: now_rfc3339(),
        };
        inner.portfolio.insert(id, stored.clone());

        Ok(stored)
    }

    async fn get_portfolio_item(&self, id: PortfolioItemId) -> Result<Option<PortfolioItem>> {
        let inner = self.lock()?;
        Ok(inner.portfolio.get(&id).cloned())
    }

    async fn delete_portfolio_item(&self, id: PortfolioItemId) -> Result<()> {
        let mut inner = self.lock()?;
        inner
            .portfolio
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| PlayhouseError::not_found("Portfolio item", id))
    }

    // Bookings
    async fn create_booking(&self, booking: CreateBooking) -> Result<Booking> {
        let mut inner = self.lock()?;

        let id = next_id(&mut inner.next_booking_id);
        let stored = Booking {
            id,
            name: booking.name,
            email: booking.email,
            artist_id: booking.artist_id,
            message: booking.message,
            date: booking.date,
            created_at: now_rfc3339(),
        };
        inner.bookings.insert(id, stored.clone());

        Ok(stored)
    }

    async fn list_bookings(&self) -> Result<Vec<Booking>> {
        let inner = self.lock()?;
        Ok(inner.bookings.values().cloned().collect())
    }

    // About content
    async fn get_about(&self) -> Result<AboutContent> {
        let mut inner = self.lock()?;
        Ok(inner
            .about
            .get_or_insert_with(AboutContent::studio_default)
            .clone())
    }

    async fn update_about(&self, update: UpdateAboutContent) -> Result<AboutContent> {
        let mut inner = self.lock()?;
        let about = inner.about.get_or_insert_with(AboutContent::studio_default);

        if let Some(story) = update.story {
            about.story = story;
        }
        if let Some(space) = update.space {
            about.space = space;
        }
        if let Some(philosophy) = update.philosophy {
            about.philosophy = philosophy;
        }
        if let Some(value_cards) = update.value_cards {
            about.value_cards = value_cards;
        }
        about.updated_at = now_rfc3339();

        Ok(about.clone())
    }

    // Users & credentials
    async fn create_user(&self, user: CreateUser) -> Result<User> {
        let mut inner = self.lock()?;

        if inner.users.values().any(|u| u.username == user.username) {
            return Err(PlayhouseError::duplicate(format!(
                "username already exists: {}",
                user.username
            )));
        }

        let id = next_id(&mut inner.next_user_id);
        let stored = User {
            id,
            username: user.username,
            role: user.role,
            created_at: now_rfc3339(),
        };
        inner.users.insert(id, stored.clone());

        Ok(stored)
    }

    async fn get_user(&self, id: UserId) -> Result<Option<User>> {
        let inner = self.lock()?;
        Ok(inner.users.get(&id).cloned())
    }

    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>> {
        let inner = self.lock()?;
        Ok(inner
            .users
            .values()
            .find(|user| user.username == username)
            .cloned())
    }

    async fn list_users(&self) -> Result<Vec<User>> {
        let inner = self.lock()?;
        Ok(inner.users.values().cloned().collect())
    }

    async fn set_password_hash(&self, user_id: UserId, password_hash: &str) -> Result<()> {
        let mut inner = self.lock()?;
        inner.credentials.insert(user_id, password_hash.to_string());
        Ok(())
    }

    async fn get_password_hash(&self, user_id: UserId) -> Result<Option<String>> {
        let inner = self.lock()?;
        Ok(inner.credentials.get(&user_id).cloned())
    }

    // Sessions
    async fn create_session(&self, token: &str, user_id: UserId, expires_at: &str) -> Result<()> {
        let mut inner = self.lock()?;
        inner.sessions.insert(
            token.to_string(),
            Session {
                token: token.to_string(),
                user_id,
                created_at: now_rfc3339(),
                expires_at: expires_at.to_string(),
            },
        );
        Ok(())
    }

    async fn get_session(&self, token: &str) -> Result<Option<Session>> {
        let mut inner = self.lock()?;

        let Some(session) = inner.sessions.get(token).cloned() else {
            return Ok(None);
        };

        if session.is_expired() {
            inner.sessions.remove(token);
            return Ok(None);
        }

        Ok(Some(session))
    }

    async fn delete_session(&self, token: &str) -> Result<()> {
        let mut inner = self.lock()?;
        inner.sessions.remove(token);
        Ok(())
    }

    async fn delete_expired_sessions(&self) -> Result<u64> {
        let mut inner = self.lock()?;
        let before = inner.sessions.len();
        inner.sessions.retain(|_, session| !session.is_expired());
        Ok((before - inner.sessions.len()) as u64)
    }
}
