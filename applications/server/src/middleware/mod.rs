/// Request middleware
pub mod auth;

pub use auth::{authenticate, require_admin, session_token, CurrentUser};
