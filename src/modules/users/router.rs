use crate::modules::users::controller::{assign_role, get_roles, get_users};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, put},
};

pub fn init_users_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_users))
        .route("/roles", get(get_roles))
        .route("/{id}/role", put(assign_role))
}
