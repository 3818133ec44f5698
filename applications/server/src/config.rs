/// Server configuration
use crate::error::{Result, ServerError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_server")]
    pub server: ServerSettings,

    #[serde(default = "default_storage")]
    pub storage: StorageSettings,

    #[serde(default = "default_auth")]
    pub auth: AuthSettings,

    #[serde(default = "default_chat")]
    pub chat: ChatSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageSettings {
    #[serde(default = "default_database_url")]
    pub database_url: String,

    #[serde(default = "default_uploads_dir")]
    pub uploads_dir: PathBuf,

    #[serde(default = "default_web_dir")]
    pub web_dir: PathBuf,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthSettings {
    #[serde(default)]
    pub session_secret: String,

    #[serde(default = "default_session_ttl_hours")]
    pub session_ttl_hours: u64,

    #[serde(default)]
    pub cookie_secure: bool,

    #[serde(default)]
    pub bootstrap_admin_password: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChatSettings {
    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(default = "default_chat_api_base")]
    pub api_base: String,

    #[serde(default = "default_chat_model")]
    pub model: String,

    #[serde(default = "default_chat_max_tokens")]
    pub max_tokens: u32,
}

impl ServerConfig {
    /// Load configuration from file and environment
    pub fn load() -> Result<Self> {
        let mut settings = config::Config::builder();

        // Load from config file if it exists
        let config_path = PathBuf::from("config.toml");
        if config_path.exists() {
            settings = settings.add_source(config::File::from(config_path));
        }

        // Override with environment variables, e.g. PLAYHOUSE_AUTH__SESSION_SECRET
        settings = settings.add_source(
            config::Environment::with_prefix("PLAYHOUSE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| ServerError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.auth.session_secret.is_empty() {
            return Err(ServerError::Config(
                "Session secret is required (set PLAYHOUSE_AUTH__SESSION_SECRET)".to_string(),
            ));
        }

        if self.auth.session_ttl_hours == 0 {
            return Err(ServerError::Config(
                "Session TTL must be at least one hour".to_string(),
            ));
        }

        Ok(())
    }
}

// Default values
fn default_server() -> ServerSettings {
    ServerSettings {
        host: default_host(),
        port: default_port(),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_storage() -> StorageSettings {
    StorageSettings {
        database_url: default_database_url(),
        uploads_dir: default_uploads_dir(),
        web_dir: default_web_dir(),
    }
}

fn default_database_url() -> String {
    "sqlite://./data/playhouse.db".to_string()
}

fn default_uploads_dir() -> PathBuf {
    PathBuf::from("./data/uploads")
}

fn default_web_dir() -> PathBuf {
    PathBuf::from("./web/dist")
}

fn default_auth() -> AuthSettings {
    AuthSettings {
        session_secret: String::new(),
        session_ttl_hours: default_session_ttl_hours(),
        cookie_secure: false,
        bootstrap_admin_password: None,
    }
}

fn default_session_ttl_hours() -> u64 {
    24
}

fn default_chat() -> ChatSettings {
    ChatSettings {
        api_key: None,
        api_base: default_chat_api_base(),
        model: default_chat_model(),
        max_tokens: default_chat_max_tokens(),
    }
}

fn default_chat_api_base() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_chat_model() -> String {
    "gpt-4o".to_string()
}

fn default_chat_max_tokens() -> u32 {
    150
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            storage: default_storage(),
            auth: default_auth(),
            chat: default_chat(),
        }
    }
}
