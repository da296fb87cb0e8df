use time::OffsetDateTime;
use uuid::Uuid;

/// A stored message. The `id` is assigned by the service and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: Uuid,
    pub author: String,
    pub content: String,
    pub created_at: OffsetDateTime,
    pub like_count: i32,
}

/// Client-supplied message contents before the service has materialized it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageDraft {
    pub id: Option<Uuid>,
    pub author: String,
    pub content: String,
    pub created_at: Option<OffsetDateTime>,
    pub like_count: Option<i32>,
}

impl MessageDraft {
    #[must_use]
    pub fn new(author: impl Into<String>, content: impl Into<String>) -> Self {
        Self { author: author.into(), content: content.into(), ..Self::default() }
    }

    #[must_use]
    pub const fn with_id(mut self, id: Uuid) -> Self {
        self.id = Some(id);
        self
    }

    /// Builds the stored form under `id`, defaulting the timestamp to `now` and the like count to zero.
    #[must_use]
    pub fn into_message(self, id: Uuid, now: OffsetDateTime) -> Message {
        Message {
            id,
            author: self.author,
            content: self.content,
            created_at: self.created_at.unwrap_or(now),
            like_count: self.like_count.unwrap_or(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_message_fills_defaults() {
        let now = OffsetDateTime::now_utc();
        let id = Uuid::new_v4();

        let message = MessageDraft::new("Gabriel", "teste").into_message(id, now);

        assert_eq!(message.id, id);
        assert_eq!(message.created_at, now);
        assert_eq!(message.like_count, 0);
    }

    #[test]
    fn test_into_message_keeps_supplied_fields() {
        let created_at = OffsetDateTime::UNIX_EPOCH;
        let draft = MessageDraft { created_at: Some(created_at), like_count: Some(7), ..MessageDraft::new("a", "b") };

        let message = draft.into_message(Uuid::new_v4(), OffsetDateTime::now_utc());

        assert_eq!(message.created_at, created_at);
        assert_eq!(message.like_count, 7);
    }
}
