//! Role-based authorization on top of [`AuthUser`].
//!
//! Two roles exist: `admin` manages the identity store, `staff` is the
//! default for self-registered accounts. Record endpoints themselves
//! are unauthenticated; these checks guard the user-management surface.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::middleware::auth::AuthUser;
use crate::modules::users::model::UserRole;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub async fn require_roles(
    State(state): State<AppState>,
    req: Request,
    next: Next,
    allowed_roles: Vec<UserRole>,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let auth_user = AuthUser::from_request_parts(&mut parts, &state).await?;
    let user_role = parse_role_from_string(auth_user.role())?;

    if !allowed_roles.contains(&user_role) {
        return Err(AppError::forbidden(format!(
            "Access denied. Required roles: {:?}, but user has role: {:?}",
            allowed_roles, user_role
        )));
    }

    let req = Request::from_parts(parts, body);
    Ok(next.run(req).await)
}

/// Middleware closure for admin-only routes.
///
/// ```rust,ignore
/// Router::new()
///     .route("/users", get(list_users))
///     .layer(middleware::from_fn_with_state(state.clone(), require_admin));
/// ```
pub async fn require_admin(State(state): State<AppState>, req: Request, next: Next) -> Response {
    match require_roles(State(state), req, next, vec![UserRole::Admin]).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

/// Extractor variant for handlers that want the admin check inline.
#[derive(Debug, Clone)]
pub struct RequireAdmin(pub AuthUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_user = AuthUser::from_request_parts(parts, state).await?;
        let user_role = parse_role_from_string(auth_user.role())?;

        if user_role != UserRole::Admin {
            return Err(AppError::forbidden(
                "Access denied. Administrator privileges required.",
            ));
        }

        Ok(RequireAdmin(auth_user))
    }
}

pub fn parse_role_from_string(role_str: &str) -> Result<UserRole, AppError> {
    match role_str {
        "admin" => Ok(UserRole::Admin),
        "staff" => Ok(UserRole::Staff),
        _ => Err(AppError::internal(anyhow::anyhow!(
            "Invalid role: {}",
            role_str
        ))),
    }
}
