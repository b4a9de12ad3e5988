//! Repository traits describing persistence adapters.

use async_trait::async_trait;
use thiserror::Error;
use time::OffsetDateTime;

use crate::domain::entities::{MessageRecord, UserRecord};

#[derive(Debug, Error)]
pub enum RepoError {
    #[error("persistence error: {0}")]
    Persistence(String),
    #[error("duplicate record violates unique constraint `{constraint}`")]
    Duplicate { constraint: String },
    #[error("database timeout")]
    Timeout,
}

impl RepoError {
    pub fn from_persistence(err: impl std::fmt::Display) -> Self {
        Self::Persistence(err.to_string())
    }
}

/// Insert parameters for a user. `username` stays optional so that a missing
/// value reaches the store and fails there.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub username: Option<String>,
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone)]
pub struct CreateMessageParams {
    pub content: Option<String>,
    pub user_id: i64,
    pub created_at: OffsetDateTime,
}

#[async_trait]
pub trait UsersRepo: Send + Sync {
    async fn list_users(&self) -> Result<Vec<UserRecord>, RepoError>;

    async fn create_user(&self, params: CreateUserParams) -> Result<UserRecord, RepoError>;
}

#[async_trait]
pub trait MessagesRepo: Send + Sync {
    async fn list_messages(&self) -> Result<Vec<MessageRecord>, RepoError>;

    async fn create_message(&self, params: CreateMessageParams)
    -> Result<MessageRecord, RepoError>;
}
