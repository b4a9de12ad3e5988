use async_trait::async_trait;
use time::OffsetDateTime;

use crate::{
    application::repos::{CreateMessageParams, MessagesRepo, RepoError},
    domain::entities::MessageRecord,
};

use super::{SqliteRepositories, map_sqlx_error};

#[derive(sqlx::FromRow)]
struct MessageRow {
    id: i64,
    content: String,
    user_id: i64,
    created_at: OffsetDateTime,
}

impl From<MessageRow> for MessageRecord {
    fn from(row: MessageRow) -> Self {
        Self {
            id: row.id,
            content: row.content,
            user_id: row.user_id,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl MessagesRepo for SqliteRepositories {
    async fn list_messages(&self) -> Result<Vec<MessageRecord>, RepoError> {
        let rows = sqlx::query_as::<_, MessageRow>(
            r#"
            SELECT id, content, user_id, created_at
            FROM messages
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool())
        .await
        .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(MessageRecord::from).collect())
    }

    async fn create_message(
        &self,
        params: CreateMessageParams,
    ) -> Result<MessageRecord, RepoError> {
        let row = sqlx::query_as::<_, MessageRow>(
            r#"
            INSERT INTO messages (content, user_id, created_at)
            VALUES (?, ?, ?)
            RETURNING id, content, user_id, created_at
            "#,
        )
        .bind(params.content)
        .bind(params.user_id)
        .bind(params.created_at)
        .fetch_one(self.pool())
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.into())
    }
}
