use crate::domain::message::Message;
use crate::domain::page::{Page, PageRequest};
use crate::error::Result;
use async_trait::async_trait;
use uuid::Uuid;

/// Persistence port for message records.
#[async_trait]
pub trait MessageStore: Send + Sync + std::fmt::Debug + 'static {
    /// Inserts the record, or replaces every field of an existing record with the same id.
    async fn save(&self, message: &Message) -> Result<Message>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Message>>;
    /// Returns one page ordered by `created_at`, then `id`.
    async fn find_all(&self, request: PageRequest) -> Result<Page<Message>>;
    /// Deleting an id that does not exist is a no-op.
    async fn delete_by_id(&self, id: Uuid) -> Result<()>;
    async fn count(&self) -> Result<i64>;
    async fn ping(&self) -> Result<()>;
}
