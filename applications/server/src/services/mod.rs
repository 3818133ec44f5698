/// Server services
pub mod auth;
pub mod chat;
pub mod images;

pub use auth::AuthService;
pub use chat::ChatClient;
pub use images::ImageStore;
