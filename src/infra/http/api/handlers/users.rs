//! Users handlers

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::users::CreateUserCommand;

use super::user_to_api;
use crate::infra::http::api::error::ApiError;
use crate::infra::http::api::models::UserCreateRequest;
use crate::infra::http::api::state::ApiState;

pub async fn list_users(State(state): State<ApiState>) -> Result<impl IntoResponse, ApiError> {
    let users = state.users.list().await.map_err(user_to_api)?;
    Ok(Json(users))
}

pub async fn create_user(
    State(state): State<ApiState>,
    Json(payload): Json<UserCreateRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let command = CreateUserCommand {
        username: payload.username,
    };

    let user = state.users.create(command).await.map_err(user_to_api)?;

    Ok((StatusCode::CREATED, Json(user)))
}
