use crate::adapters::store::MessageStore;
use crate::domain::message::{Message, MessageDraft};
use crate::domain::page::{Page, PageRequest};
use crate::error::{AppError, Result};
use opentelemetry::{KeyValue, global, metrics::Counter};
use std::sync::Arc;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Clone, Debug)]
pub(crate) struct Metrics {
    pub(crate) operations_total: Counter<u64>,
}

impl Metrics {
    fn new() -> Self {
        let meter = global::meter("message-board");
        Self {
            operations_total: meter
                .u64_counter("message_board_message_operations_total")
                .with_description("Message mutations by operation and outcome")
                .build(),
        }
    }

    fn record<T>(&self, operation: &'static str, result: &Result<T>) {
        let status = if result.is_ok() { "success" } else { "failure" };
        self.operations_total.add(1, &[KeyValue::new("operation", operation), KeyValue::new("status", status)]);
    }
}

/// Business rules over message records. All persistence goes through the injected store.
#[derive(Clone, Debug)]
pub struct MessageService {
    store: Arc<dyn MessageStore>,
    metrics: Metrics,
}

impl MessageService {
    #[must_use]
    pub fn new(store: Arc<dyn MessageStore>) -> Self {
        Self { store, metrics: Metrics::new() }
    }

    /// Stores a new message under a freshly generated id, ignoring any id the caller supplied.
    ///
    /// # Errors
    /// Returns `AppError::Database` if the message cannot be stored.
    #[tracing::instrument(err(level = "warn"), skip(self, draft))]
    pub async fn register(&self, draft: MessageDraft) -> Result<Message> {
        let message = draft.into_message(Uuid::new_v4(), OffsetDateTime::now_utc());
        let result = self.store.save(&message).await;
        self.metrics.record("register", &result);

        let message = result?;
        tracing::debug!(message_id = %message.id, "Message registered");
        Ok(message)
    }

    /// # Errors
    /// Returns `AppError::NotFound` if no message has this id.
    #[tracing::instrument(err(level = "debug"), skip(self), fields(message_id = %id))]
    pub async fn find(&self, id: Uuid) -> Result<Message> {
        self.store.find_by_id(id).await?.ok_or(AppError::NotFound)
    }

    /// # Errors
    /// Returns `AppError::Database` if the query fails.
    #[tracing::instrument(err(level = "warn"), skip(self), fields(page = request.page, size = request.size))]
    pub async fn list(&self, request: PageRequest) -> Result<Page<Message>> {
        self.store.find_all(request).await
    }

    /// Replaces every field of the stored message with `draft`.
    ///
    /// The draft must carry the same id as the target; the id check runs before the lookup so
    /// a mismatch is reported even when the target does not exist.
    ///
    /// # Errors
    /// Returns `AppError::InvalidArgument` if `draft.id` differs from `id`.
    /// Returns `AppError::NotFound` if no message has this id.
    #[tracing::instrument(err(level = "debug"), skip(self, draft), fields(message_id = %id))]
    pub async fn update(&self, id: Uuid, draft: MessageDraft) -> Result<Message> {
        let result = self.replace(id, draft).await;
        self.metrics.record("update", &result);
        result
    }

    async fn replace(&self, id: Uuid, draft: MessageDraft) -> Result<Message> {
        if draft.id != Some(id) {
            return Err(AppError::InvalidArgument("id cannot be changed".to_string()));
        }
        self.find(id).await?;

        let message = draft.into_message(id, OffsetDateTime::now_utc());
        self.store.save(&message).await
    }

    /// # Errors
    /// Returns `AppError::NotFound` if no message has this id.
    #[tracing::instrument(err(level = "debug"), skip(self), fields(message_id = %id))]
    pub async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = self.remove(id).await;
        self.metrics.record("delete", &result);
        result
    }

    async fn remove(&self, id: Uuid) -> Result<bool> {
        self.find(id).await?;
        self.store.delete_by_id(id).await?;
        Ok(true)
    }
}
