/// Authentication service - session tokens and password handling
use crate::error::{Result, ServerError};
use chrono::{Duration, SecondsFormat, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use playhouse_core::types::UserId;
use serde::{Deserialize, Serialize};

/// Name of the session cookie set on login
pub const SESSION_COOKIE: &str = "playhouse_session";

#[derive(Debug, Clone)]
pub struct AuthService {
    secret: String,
    session_ttl: Duration,
    cookie_secure: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // Subject (user ID)
    pub exp: i64,    // Expiration time
    pub iat: i64,    // Issued at
}

impl AuthService {
    pub fn new(secret: String, session_ttl_hours: u64, cookie_secure: bool) -> Self {
        Self {
            secret,
            session_ttl: Duration::hours(session_ttl_hours as i64),
            cookie_secure,
        }
    }

    /// Hash a password using bcrypt
    pub fn hash_password(&self, password: &str) -> Result<String> {
        bcrypt::hash(password, bcrypt::DEFAULT_COST).map_err(ServerError::from)
    }

    /// Verify a password against a hash
    pub fn verify_password(&self, password: &str, hash: &str) -> Result<bool> {
        bcrypt::verify(password, hash).map_err(ServerError::from)
    }

    /// Mint a session token for a user
    ///
    /// Returns the signed token and its expiry as an RFC 3339 string, which
    /// the caller records in the session store.
    pub fn create_session_token(&self, user_id: UserId) -> Result<(String, String)> {
        let now = Utc::now();
        let expires = now + self.session_ttl;

        let claims = Claims {
            sub: user_id.to_string(),
            exp: expires.timestamp(),
            iat: now.timestamp(),
        };

        let encoding_key = EncodingKey::from_secret(self.secret.as_bytes());
        let token = encode(&Header::default(), &claims, &encoding_key)?;
        let expires_at = expires.to_rfc3339_opts(SecondsFormat::Secs, true);

        Ok((token, expires_at))
    }

    /// Verify a session token and return the user it was minted for
    pub fn verify_session_token(&self, token: &str) -> Result<UserId> {
        let decoding_key = DecodingKey::from_secret(self.secret.as_bytes());
        let validation = Validation::default();

        let token_data = decode::<Claims>(token, &decoding_key, &validation)?;
        token_data
            .claims
            .sub
            .parse()
            .map_err(|_| ServerError::Auth("Invalid token".to_string()))
    }

    /// Build the Set-Cookie value that establishes a session
    pub fn session_cookie(&self, token: &str) -> String {
        let mut cookie = format!(
            "{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
            self.session_ttl.num_seconds()
        );
        if self.cookie_secure {
            cookie.push_str("; Secure");
        }
        cookie
    }

    /// Build the Set-Cookie value that clears the session
    pub fn clear_session_cookie(&self) -> String {
        let mut cookie =
            format!("{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0");
        if self.cookie_secure {
            cookie.push_str("; Secure");
        }
        cookie
    }
}
