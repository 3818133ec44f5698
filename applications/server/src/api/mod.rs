/// API route modules
pub mod about;
pub mod admin;
pub mod artists;
pub mod auth;
pub mod bookings;
pub mod chat;
pub mod health;
