/// Chat proxy API routes
use crate::{
    error::{Result, ServerError},
    state::AppState,
};
use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: Option<String>,
}

/// POST /api/chat - Forward a visitor question to the chat assistant
pub async fn chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<serde_json::Value>> {
    let Some(message) = req.message.filter(|m| !m.trim().is_empty()) else {
        return Err(ServerError::BadRequest("Message is required".to_string()));
    };

    let response = state.chat.reply(&message).await;
    Ok(Json(json!({ "response": response })))
}
