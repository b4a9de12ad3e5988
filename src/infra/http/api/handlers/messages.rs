//! Messages handlers

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::messages::CreateMessageCommand;

use super::message_to_api;
use crate::infra::http::api::error::ApiError;
use crate::infra::http::api::models::MessageCreateRequest;
use crate::infra::http::api::state::ApiState;

pub async fn list_messages(State(state): State<ApiState>) -> Result<impl IntoResponse, ApiError> {
    let feed = state.messages.feed().await.map_err(message_to_api)?;
    Ok(Json(feed))
}

pub async fn create_message(
    State(state): State<ApiState>,
    Json(payload): Json<MessageCreateRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let command = CreateMessageCommand {
        content: payload.content,
        user_id: payload.user_id,
    };

    let message = state
        .messages
        .create(command)
        .await
        .map_err(message_to_api)?;

    Ok((StatusCode::CREATED, Json(message)))
}
