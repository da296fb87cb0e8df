use crate::adapters::store::MessageStore;
use crate::domain::message::Message;
use crate::domain::page::{Page, PageRequest};
use crate::error::Result;
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;
use uuid::Uuid;

/// Process-local store used when no database is configured, and by tests.
#[derive(Clone, Debug, Default)]
pub struct InMemoryMessageStore {
    messages: Arc<DashMap<Uuid, Message>>,
}

impl InMemoryMessageStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MessageStore for InMemoryMessageStore {
    async fn save(&self, message: &Message) -> Result<Message> {
        self.messages.insert(message.id, message.clone());
        Ok(message.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Message>> {
        Ok(self.messages.get(&id).map(|entry| entry.value().clone()))
    }

    async fn find_all(&self, request: PageRequest) -> Result<Page<Message>> {
        let mut all: Vec<Message> = self.messages.iter().map(|entry| entry.value().clone()).collect();
        all.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));

        let total = i64::try_from(all.len()).unwrap_or(i64::MAX);
        let skip = usize::try_from(request.offset()).unwrap_or(usize::MAX);
        let content = all.into_iter().skip(skip).take(request.size as usize).collect();

        Ok(Page::new(content, request, total))
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<()> {
        self.messages.remove(&id);
        Ok(())
    }

    async fn count(&self) -> Result<i64> {
        Ok(i64::try_from(self.messages.len()).unwrap_or(i64::MAX))
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::message::MessageDraft;
    use time::{Duration, OffsetDateTime};

    fn message_at(offset_secs: i64) -> Message {
        MessageDraft::new("Gabriel", "teste")
            .into_message(Uuid::new_v4(), OffsetDateTime::UNIX_EPOCH + Duration::seconds(offset_secs))
    }

    #[tokio::test]
    async fn test_save_and_find() {
        let store = InMemoryMessageStore::new();
        let message = message_at(0);

        store.save(&message).await.unwrap();

        assert_eq!(store.find_by_id(message.id).await.unwrap(), Some(message));
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_save_replaces_existing() {
        let store = InMemoryMessageStore::new();
        let mut message = message_at(0);
        store.save(&message).await.unwrap();

        message.content = "abcabcabcabc".to_string();
        store.save(&message).await.unwrap();

        assert_eq!(store.count().await.unwrap(), 1);
        assert_eq!(store.find_by_id(message.id).await.unwrap().unwrap().content, "abcabcabcabc");
    }

    #[tokio::test]
    async fn test_delete_missing_is_noop() {
        let store = InMemoryMessageStore::new();
        store.delete_by_id(Uuid::new_v4()).await.unwrap();
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_find_all_pages_in_creation_order() {
        let store = InMemoryMessageStore::new();
        let messages: Vec<Message> = (0..5).map(message_at).collect();
        for m in messages.iter().rev() {
            store.save(m).await.unwrap();
        }

        let first = store.find_all(PageRequest::new(0, 2)).await.unwrap();
        let last = store.find_all(PageRequest::new(2, 2)).await.unwrap();
        let beyond = store.find_all(PageRequest::new(9, 2)).await.unwrap();

        assert_eq!(first.content, messages[0..2].to_vec());
        assert_eq!(first.total_elements, 5);
        assert_eq!(first.total_pages(), 3);
        assert_eq!(last.content, messages[4..].to_vec());
        assert!(beyond.content.is_empty());
    }
}
