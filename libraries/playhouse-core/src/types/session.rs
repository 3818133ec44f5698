//! Session types

use super::user::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A server-side session backing the session cookie
///
/// The token doubles as the primary key. Logout deletes the row, which
/// invalidates the cookie even while the token itself is still within
/// its expiry window.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub token: String,
    pub user_id: UserId,
    pub created_at: String,
    pub expires_at: String,
}

impl Session {
    /// Whether the session's expiry has passed
    ///
    /// An unparseable expiry timestamp counts as expired.
    pub fn is_expired(&self) -> bool {
        DateTime::parse_from_rfc3339(&self.expires_at)
            .map_or(true, |expires| expires.with_timezone(&Utc) <= Utc::now())
    }
}
