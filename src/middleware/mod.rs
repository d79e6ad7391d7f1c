//! Request-processing middleware.
//!
//! - [`auth`]: the `AuthUser` bearer-token extractor
//! - [`role`]: role checks layered on top of it
//!
//! Flow: `Authorization: Bearer <token>` header → [`auth::AuthUser`]
//! validates the JWT and exposes the claims → role middleware or the
//! handler decides what the caller may do.

pub mod auth;
pub mod role;
