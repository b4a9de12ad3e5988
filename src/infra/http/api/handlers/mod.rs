//! API handlers organized by resource type.
//!
//! Helper functions for error conversion are defined here and shared across modules.

mod demo;
mod health;
mod hello;
mod messages;
mod users;

pub use demo::*;
pub use health::*;
pub use hello::*;
pub use messages::*;
pub use users::*;

use axum::http::StatusCode;

use crate::application::cache::CacheError;
use crate::application::greeting::GreetingError;
use crate::application::messages::MessageError;
use crate::application::repos::RepoError;
use crate::application::users::UserError;

use super::error::{ApiError, codes};

pub(crate) fn repo_to_api(err: RepoError) -> ApiError {
    match err {
        RepoError::Duplicate { constraint } => ApiError::new(
            StatusCode::CONFLICT,
            codes::DUPLICATE,
            "Duplicate record",
            Some(constraint),
        ),
        RepoError::Timeout => ApiError::new(
            StatusCode::SERVICE_UNAVAILABLE,
            codes::DB_TIMEOUT,
            "Database timeout",
            None,
        ),
        RepoError::Persistence(msg) => ApiError::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            codes::REPO,
            "Persistence error",
            Some(msg),
        ),
    }
}

pub(crate) fn cache_to_api(err: CacheError) -> ApiError {
    ApiError::new(
        StatusCode::INTERNAL_SERVER_ERROR,
        codes::CACHE,
        "Cache error",
        Some(err.to_string()),
    )
}

pub(crate) fn greeting_to_api(err: GreetingError) -> ApiError {
    match err {
        GreetingError::Cache(cache) => cache_to_api(cache),
    }
}

pub(crate) fn user_to_api(err: UserError) -> ApiError {
    match err {
        UserError::Repo(repo) => repo_to_api(repo),
    }
}

pub(crate) fn message_to_api(err: MessageError) -> ApiError {
    match err {
        MessageError::Repo(repo) => repo_to_api(repo),
        MessageError::Greeting(greeting) => greeting_to_api(greeting),
    }
}
