/// Shared application state
use crate::services::{AuthService, ChatClient, ImageStore};
use playhouse_core::StorageContext;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn StorageContext>,
    pub auth: Arc<AuthService>,
    pub images: Arc<ImageStore>,
    pub chat: Arc<ChatClient>,
}

impl AppState {
    pub fn new(
        storage: Arc<dyn StorageContext>,
        auth: Arc<AuthService>,
        images: Arc<ImageStore>,
        chat: Arc<ChatClient>,
    ) -> Self {
        Self {
            storage,
            auth,
            images,
            chat,
        }
    }
}
