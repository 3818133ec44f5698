//! Playhouse Server Library
//!
//! Tattoo studio backend: public artist and booking API, AI chat proxy,
//! and a session-gated admin surface over SQLite storage.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod middleware;
pub mod router;
pub mod services;
pub mod state;

// Re-export commonly used types for convenience
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use router::create_router;
pub use services::{auth::AuthService, chat::ChatClient, images::ImageStore};
pub use state::AppState;
