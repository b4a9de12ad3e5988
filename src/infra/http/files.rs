//! Listener that serves the JSON documents under the data directory.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::json;

use crate::application::{
    data_files::{DataFile, DataFileError, DataFileService},
    error::ErrorReport,
};

use super::middleware::{log_responses, set_request_context};

const SOURCE: &str = "infra::http::files";

#[derive(Clone)]
pub struct FilesState {
    pub files: Arc<DataFileService>,
}

pub fn build_files_router(state: FilesState) -> Router {
    Router::new()
        .route("/names", get(names))
        .route("/fizz", get(fizz))
        .route("/buzz", get(buzz))
        .with_state(state)
        .layer(middleware::from_fn(log_responses))
        .layer(middleware::from_fn(set_request_context))
}

async fn names(State(state): State<FilesState>) -> Response {
    serve(&state, DataFile::Names).await
}

async fn fizz(State(state): State<FilesState>) -> Response {
    serve(&state, DataFile::Fizz).await
}

async fn buzz(State(state): State<FilesState>) -> Response {
    serve(&state, DataFile::Buzz).await
}

async fn serve(state: &FilesState, file: DataFile) -> Response {
    match state.files.load(file).await {
        Ok(document) => Json(document).into_response(),
        Err(err) => data_file_error_response(err),
    }
}

fn data_file_error_response(err: DataFileError) -> Response {
    let (status, public_message) = match &err {
        DataFileError::NotFound(_) => (StatusCode::NOT_FOUND, "File not found"),
        DataFileError::Io { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "Failed to read file"),
        DataFileError::Malformed { .. } => {
            (StatusCode::INTERNAL_SERVER_ERROR, "File is not valid JSON")
        }
    };

    let mut response = (status, Json(json!({ "error": public_message }))).into_response();
    ErrorReport::from_error(SOURCE, status, &err).attach(&mut response);
    response
}
