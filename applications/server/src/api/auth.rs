/// Authentication API routes
use crate::{
    error::{Result, ServerError},
    middleware,
    state::AppState,
};
use axum::{
    extract::State,
    http::{header, HeaderMap},
    response::IntoResponse,
    Json,
};
use playhouse_core::types::User;
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// POST /api/login - Verify credentials and establish a session
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse> {
    let (Some(username), Some(password)) = (req.username, req.password) else {
        return Err(ServerError::BadRequest(
            "Username and password are required".to_string(),
        ));
    };

    let user = state
        .storage
        .find_user_by_username(&username)
        .await?
        .ok_or_else(|| ServerError::Auth("Invalid username or password".to_string()))?;

    let password_hash = state
        .storage
        .get_password_hash(user.id)
        .await?
        .ok_or_else(|| ServerError::Auth("Invalid username or password".to_string()))?;

    if !state.auth.verify_password(&password, &password_hash)? {
        return Err(ServerError::Auth(
            "Invalid username or password".to_string(),
        ));
    }

    let (token, expires_at) = state.auth.create_session_token(user.id)?;
    state
        .storage
        .create_session(&token, user.id, &expires_at)
        .await?;

    let cookie = state.auth.session_cookie(&token);
    Ok(([(header::SET_COOKIE, cookie)], Json(user)))
}

/// POST /api/logout - Revoke the session and clear the cookie
///
/// Always succeeds, even for anonymous callers.
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse> {
    if let Some(token) = middleware::session_token(&headers) {
        state.storage.delete_session(&token).await?;
    }

    let cookie = state.auth.clear_session_cookie();
    Ok(([(header::SET_COOKIE, cookie)], Json(json!({ "success": true }))))
}

/// GET /api/user - The authenticated user, or 401
pub async fn current_user(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<User>> {
    let user = middleware::authenticate(&state, &headers)
        .await?
        .ok_or_else(|| ServerError::Auth("Not authenticated".to_string()))?;
    Ok(Json(user))
}
