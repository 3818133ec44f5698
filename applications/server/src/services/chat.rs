/// Chat service - proxies visitor questions to a chat-completions API
use crate::config::ChatSettings;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const SYSTEM_PROMPT: &str = "You are a helpful tattoo expert assistant. Provide concise, accurate information about tattoos, aftercare, and the tattooing process. Keep responses friendly but professional.";

const EMPTY_REPLY_FALLBACK: &str = "I'm sorry, I couldn't process that request.";
const ERROR_FALLBACK: &str = "Sorry, I'm having trouble processing your request right now.";

#[derive(Debug, Clone)]
pub struct ChatClient {
    http: reqwest::Client,
    settings: ChatSettings,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

impl ChatClient {
    pub fn new(settings: ChatSettings) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self { http, settings })
    }

    /// Answer a visitor message, falling back to a fixed apology on failure
    ///
    /// Transport and API errors never surface to the caller; visitors get
    /// the apology string and the error goes to the log.
    pub async fn reply(&self, message: &str) -> String {
        let Some(api_key) = self
            .settings
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
        else {
            tracing::warn!("Chat API key not configured, returning fallback reply");
            return ERROR_FALLBACK.to_string();
        };

        match self.request_completion(api_key, message).await {
            Ok(Some(content)) => content,
            Ok(None) => EMPTY_REPLY_FALLBACK.to_string(),
            Err(err) => {
                tracing::error!("Chat completion failed: {}", err);
                ERROR_FALLBACK.to_string()
            }
        }
    }

    async fn request_completion(
        &self,
        api_key: &str,
        message: &str,
    ) -> std::result::Result<Option<String>, reqwest::Error> {
        let request = ChatCompletionRequest {
            model: &self.settings.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: message,
                },
            ],
            max_tokens: self.settings.max_tokens,
        };

        let response = self
            .http
            .post(format!("{}/chat/completions", self.settings.api_base))
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await?
            .error_for_status()?;

        let completion: ChatCompletionResponse = response.json().await?;

        Ok(completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.is_empty()))
    }
}
