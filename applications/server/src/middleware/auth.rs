/// Session authentication middleware
use crate::{error::ServerError, services::auth::SESSION_COOKIE, state::AppState};
use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};
use playhouse_core::types::{Role, User};

/// Extension type carrying the authenticated user through a request
/// Can be used as an extractor in handlers
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

impl CurrentUser {
    pub fn user(&self) -> &User {
        &self.0
    }
}

/// Pull the session token out of the Cookie header
pub fn session_token(headers: &HeaderMap) -> Option<String> {
    let cookies = headers.get(header::COOKIE)?.to_str().ok()?;
    cookies.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == SESSION_COOKIE).then(|| value.to_string())
    })
}

/// Resolve the request's session cookie to a user
///
/// Returns None for missing, invalid, or expired credentials; callers pick
/// the status code. Errors are reserved for storage failures.
pub async fn authenticate(
    state: &AppState,
    headers: &HeaderMap,
) -> Result<Option<User>, ServerError> {
    let Some(token) = session_token(headers) else {
        return Ok(None);
    };

    // Signature or expiry failure means the cookie is garbage, not an error
    if state.auth.verify_session_token(&token).is_err() {
        return Ok(None);
    }

    // The session row must still exist: logout revokes tokens before they expire
    let Some(session) = state.storage.get_session(&token).await? else {
        return Ok(None);
    };

    Ok(state.storage.get_user(session.user_id).await?)
}

/// Middleware guarding the admin API: session cookie plus admin role
pub async fn require_admin(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ServerError> {
    let user = authenticate(&state, request.headers())
        .await?
        .filter(|user| user.role == Role::Admin)
        .ok_or_else(|| ServerError::Forbidden("Unauthorized".to_string()))?;

    request.extensions_mut().insert(CurrentUser(user));

    Ok(next.run(request).await)
}

/// Implement FromRequestParts so CurrentUser can be used as an extractor
#[axum::async_trait]
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentUser>()
            .cloned()
            .ok_or_else(|| ServerError::Forbidden("Not authenticated".to_string()))
    }
}
