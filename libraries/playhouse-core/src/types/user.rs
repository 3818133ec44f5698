/// User domain types
use crate::error::PlayhouseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub type UserId = i64;

/// User account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user identifier
    pub id: UserId,

    /// Login name, unique across accounts
    pub username: String,

    /// Access role
    pub role: Role,

    /// Account creation timestamp (RFC 3339)
    pub created_at: String,
}

/// Data for creating a new user account
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUser {
    /// Login name, unique across accounts
    pub username: String,

    /// Access role for the new account
    pub role: Role,
}

/// Access role attached to a user account
///
/// Only `Admin` passes the admin gate. `Artist` accounts exist so studio
/// members can sign in without gaining content management rights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Full content management access
    Admin,
    /// Studio artist account without admin rights
    Artist,
}

impl Role {
    /// Canonical lowercase name, as stored in the database
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Artist => "artist",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = PlayhouseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "artist" => Ok(Self::Artist),
            other => Err(PlayhouseError::invalid_input(format!(
                "unknown role: {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_through_str() {
        assert_eq!("admin".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!("artist".parse::<Role>().unwrap(), Role::Artist);
        assert_eq!(Role::Admin.as_str(), "admin");
        assert!("superuser".parse::<Role>().is_err());
    }

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
    }
}
