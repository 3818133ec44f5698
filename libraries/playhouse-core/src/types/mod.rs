mod about;
mod artist;
mod booking;
mod portfolio;
mod session;
mod user;

pub use about::{AboutContent, UpdateAboutContent, ValueCard};
pub use artist::{Artist, ArtistId, CreateArtist, UpdateArtist};
pub use booking::{Booking, BookingId, CreateBooking};
pub use portfolio::{CreatePortfolioItem, PortfolioItem, PortfolioItemId};
pub use session::Session;
pub use user::{CreateUser, Role, User, UserId};

use chrono::{SecondsFormat, Utc};

/// Current UTC time as an RFC 3339 string (whole-second precision)
///
/// All persisted timestamps use this format so they stay comparable
/// across the storage backends.
pub fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}
