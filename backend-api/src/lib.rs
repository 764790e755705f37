pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod state;

pub use config::Config;
pub use error::AppError;
pub use state::AppState;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build the router; integration tests drive this directly with `oneshot`.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/api/users/hello", get(handlers::users::hello))
        .route("/api/users", post(handlers::users::create_user))
        .route("/api/users/:user_id", get(handlers::users::get_user_by_id))
        .route(
            "/api/users/:user_id/roles",
            get(handlers::users::get_user_roles),
        )
        .route(
            "/api/users/:user_id/groups",
            get(handlers::users::get_user_groups),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
