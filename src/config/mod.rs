//! Application configuration.
//!
//! Every submodule loads one concern from environment variables and
//! hands back a plain struct; the structs are assembled once into
//! [`crate::state::AppState`] at startup so nothing downstream reads
//! the environment directly.
//!
//! - [`cors`]: allowed CORS origins
//! - [`database`]: PostgreSQL pool initialization
//! - [`email`]: SMTP settings for outbound mail
//! - [`jwt`]: token secret and expiry

pub mod cors;
pub mod database;
pub mod email;
pub mod jwt;
