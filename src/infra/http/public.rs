use axum::{Router, http::StatusCode, middleware, response::Response, routing::get};

use crate::presentation::views::{IndexTemplate, render_template_response};

use super::{
    api::{ApiState, build_api_router},
    middleware::{log_responses, set_request_context},
};

/// Landing page plus the JSON API, served on the public listener.
pub fn build_router(state: ApiState) -> Router {
    Router::new()
        .route("/", get(index))
        .merge(build_api_router())
        .with_state(state)
        .layer(middleware::from_fn(log_responses))
        .layer(middleware::from_fn(set_request_context))
}

async fn index() -> Response {
    render_template_response(IndexTemplate::landing(), StatusCode::OK)
}
