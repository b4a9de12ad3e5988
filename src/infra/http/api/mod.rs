pub mod error;
pub mod handlers;
pub mod models;
pub mod state;

pub use state::ApiState;

use axum::{Router, routing::get};

pub fn build_api_router() -> Router<ApiState> {
    Router::new()
        .route("/api/hello", get(handlers::hello))
        .route(
            "/api/users",
            get(handlers::list_users).post(handlers::create_user),
        )
        .route(
            "/api/messages",
            get(handlers::list_messages).post(handlers::create_message),
        )
        .route("/api/pandas-demo", get(handlers::sample_demo))
        .route("/api/health", get(handlers::health))
}
