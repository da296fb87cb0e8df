use crate::domain::message::{Message, MessageDraft};
use crate::domain::page::Page;
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageRequest {
    #[serde(default)]
    pub id: Option<Uuid>,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub content: String,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
    #[serde(default)]
    pub like_count: Option<i32>,
}

impl TryFrom<MessageRequest> for MessageDraft {
    type Error = AppError;

    fn try_from(req: MessageRequest) -> Result<Self, Self::Error> {
        if req.author.trim().is_empty() {
            return Err(AppError::InvalidArgument("author must not be blank".to_string()));
        }
        if req.content.trim().is_empty() {
            return Err(AppError::InvalidArgument("content must not be blank".to_string()));
        }

        Ok(Self {
            id: req.id,
            author: req.author,
            content: req.content,
            created_at: req.created_at,
            like_count: req.like_count,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    pub id: Uuid,
    pub author: String,
    pub content: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    pub like_count: i32,
}

impl From<Message> for MessageResponse {
    fn from(m: Message) -> Self {
        Self { id: m.id, author: m.author, content: m.content, created_at: m.created_at, like_count: m.like_count }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<T> {
    pub content: Vec<T>,
    pub page: u32,
    pub size: u32,
    pub total_elements: i64,
    pub total_pages: i64,
}

impl From<Page<Message>> for PageResponse<MessageResponse> {
    fn from(page: Page<Message>) -> Self {
        let total_pages = page.total_pages();
        let page = page.map(MessageResponse::from);
        Self { content: page.content, page: page.page, size: page.size, total_elements: page.total_elements, total_pages }
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ListQuery {
    pub page: Option<u32>,
    pub size: Option<u32>,
}
