use crate::domain::message::Message;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, sqlx::FromRow)]
pub struct MessageRecord {
    pub(crate) id: Uuid,
    pub(crate) author: String,
    pub(crate) content: String,
    pub(crate) created_at: OffsetDateTime,
    pub(crate) like_count: i32,
}

impl From<MessageRecord> for Message {
    fn from(record: MessageRecord) -> Self {
        Self {
            id: record.id,
            author: record.author,
            content: record.content,
            created_at: record.created_at,
            like_count: record.like_count,
        }
    }
}
