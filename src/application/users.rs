use std::sync::Arc;

use thiserror::Error;
use time::OffsetDateTime;
use tracing::info;

use crate::application::repos::{CreateUserParams, RepoError, UsersRepo};
use crate::domain::entities::UserRecord;

#[derive(Debug, Error)]
pub enum UserError {
    #[error(transparent)]
    Repo(#[from] RepoError),
}

#[derive(Debug, Clone, Default)]
pub struct CreateUserCommand {
    pub username: Option<String>,
}

#[derive(Clone)]
pub struct UserService {
    repo: Arc<dyn UsersRepo>,
}

impl UserService {
    pub fn new(repo: Arc<dyn UsersRepo>) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> Result<Vec<UserRecord>, UserError> {
        self.repo.list_users().await.map_err(UserError::from)
    }

    pub async fn create(&self, command: CreateUserCommand) -> Result<UserRecord, UserError> {
        let user = self
            .repo
            .create_user(CreateUserParams {
                username: command.username,
                created_at: OffsetDateTime::now_utc(),
            })
            .await?;

        info!(
            target = "hellohub::users",
            user_id = user.id,
            username = %user.username,
            "user created"
        );
        Ok(user)
    }
}
