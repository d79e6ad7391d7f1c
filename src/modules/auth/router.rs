use crate::modules::auth::controller::{
    forgot_password, login_user, me, register_user, reset_password,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

pub fn init_auth_router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register_user))
        .route("/login", post(login_user))
        .route("/me", get(me))
        .route("/forgot-password", post(forgot_password))
        .route("/reset-password", post(reset_password))
}
