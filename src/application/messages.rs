use std::sync::Arc;

use metrics::counter;
use serde::Serialize;
use thiserror::Error;
use time::OffsetDateTime;
use tracing::info;

use crate::application::greeting::{GreetingError, GreetingService};
use crate::application::repos::{CreateMessageParams, MessagesRepo, RepoError};
use crate::domain::analytics::MessageAnalytics;
use crate::domain::entities::MessageRecord;

/// Author assumed when a message is posted without `user_id`.
pub const DEFAULT_AUTHOR_ID: i64 = 1;

#[derive(Debug, Error)]
pub enum MessageError {
    #[error(transparent)]
    Repo(#[from] RepoError),
    #[error(transparent)]
    Greeting(#[from] GreetingError),
}

#[derive(Debug, Clone, Default)]
pub struct CreateMessageCommand {
    pub content: Option<String>,
    pub user_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MessageFeed {
    pub messages: Vec<MessageRecord>,
    pub analytics: MessageAnalytics,
}

#[derive(Clone)]
pub struct MessageService {
    repo: Arc<dyn MessagesRepo>,
    greeting: GreetingService,
}

impl MessageService {
    pub fn new(repo: Arc<dyn MessagesRepo>, greeting: GreetingService) -> Self {
        Self { repo, greeting }
    }

    pub async fn feed(&self) -> Result<MessageFeed, MessageError> {
        let messages = self.repo.list_messages().await?;
        let analytics = MessageAnalytics::from_messages(&messages);
        Ok(MessageFeed {
            messages,
            analytics,
        })
    }

    /// Stores the message, then drops the cached greeting.
    pub async fn create(&self, command: CreateMessageCommand) -> Result<MessageRecord, MessageError> {
        let message = self
            .repo
            .create_message(CreateMessageParams {
                content: command.content,
                user_id: command.user_id.unwrap_or(DEFAULT_AUTHOR_ID),
                created_at: OffsetDateTime::now_utc(),
            })
            .await?;

        self.greeting.invalidate().await?;
        counter!("hellohub_messages_created_total").increment(1);

        info!(
            target = "hellohub::messages",
            message_id = message.id,
            user_id = message.user_id,
            "message created"
        );
        Ok(message)
    }
}
