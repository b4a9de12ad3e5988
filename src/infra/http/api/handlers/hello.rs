use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;

use super::greeting_to_api;
use crate::infra::http::api::error::ApiError;
use crate::infra::http::api::state::ApiState;

pub async fn hello(State(state): State<ApiState>) -> Result<impl IntoResponse, ApiError> {
    let greeting = state.greeting.hello().await.map_err(greeting_to_api)?;
    Ok(Json(greeting))
}
