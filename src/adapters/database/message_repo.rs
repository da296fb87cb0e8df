use crate::adapters::database::DbPool;
use crate::adapters::database::records::MessageRecord;
use crate::adapters::store::MessageStore;
use crate::domain::message::Message;
use crate::domain::page::{Page, PageRequest};
use crate::error::Result;
use async_trait::async_trait;
use uuid::Uuid;

#[derive(Clone, Debug)]
pub struct MessageRepository {
    pool: DbPool,
}

impl MessageRepository {
    #[must_use]
    pub const fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MessageStore for MessageRepository {
    /// Upserts a message by id.
    ///
    /// # Errors
    /// Returns `AppError::Database` if the statement fails.
    #[tracing::instrument(level = "debug", skip(self, message), fields(message_id = %message.id))]
    async fn save(&self, message: &Message) -> Result<Message> {
        let record = sqlx::query_as::<_, MessageRecord>(
            r#"
            INSERT INTO messages (id, author, content, created_at, like_count)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (id) DO UPDATE
            SET author = EXCLUDED.author,
                content = EXCLUDED.content,
                created_at = EXCLUDED.created_at,
                like_count = EXCLUDED.like_count
            RETURNING id, author, content, created_at, like_count
            "#,
        )
        .bind(message.id)
        .bind(&message.author)
        .bind(&message.content)
        .bind(message.created_at)
        .bind(message.like_count)
        .fetch_one(&self.pool)
        .await?;

        Ok(record.into())
    }

    #[tracing::instrument(level = "debug", skip(self))]
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Message>> {
        let record = sqlx::query_as::<_, MessageRecord>(
            r#"
            SELECT id, author, content, created_at, like_count
            FROM messages
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record.map(Into::into))
    }

    #[tracing::instrument(level = "debug", skip(self))]
    async fn find_all(&self, request: PageRequest) -> Result<Page<Message>> {
        let records = sqlx::query_as::<_, MessageRecord>(
            r#"
            SELECT id, author, content, created_at, like_count
            FROM messages
            ORDER BY created_at ASC, id ASC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(request.limit())
        .bind(request.offset())
        .fetch_all(&self.pool)
        .await?;

        let total = self.count().await?;

        Ok(Page::new(records.into_iter().map(Into::into).collect(), request, total))
    }

    #[tracing::instrument(level = "debug", skip(self))]
    async fn delete_by_id(&self, id: Uuid) -> Result<()> {
        sqlx::query("DELETE FROM messages WHERE id = $1").bind(id).execute(&self.pool).await?;
        Ok(())
    }

    async fn count(&self) -> Result<i64> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM messages").fetch_one(&self.pool).await?;
        Ok(total)
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
