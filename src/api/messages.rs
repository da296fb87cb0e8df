use crate::api::AppState;
use crate::api::dto::message::{ListQuery, MessageRequest, MessageResponse, PageResponse};
use crate::api::extract::{ApiJson, ApiQuery, MessageId};
use crate::domain::message::MessageDraft;
use crate::domain::page::PageRequest;
use crate::error::{AppError, Result};
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

/// Registers a new message. Any `id` in the body is ignored.
///
/// # Errors
/// Returns `AppError::InvalidArgument` if the body is malformed or the author or content is blank.
pub async fn register_message(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<MessageRequest>,
) -> Result<impl IntoResponse> {
    let draft = MessageDraft::try_from(payload)?;
    let message = state.message_service.register(draft).await?;

    Ok((StatusCode::CREATED, Json(MessageResponse::from(message))))
}

/// # Errors
/// Returns `AppError::InvalidArgument` if the id is malformed.
/// Returns `AppError::NotFound` if no message has this id.
pub async fn get_message(State(state): State<AppState>, MessageId(id): MessageId) -> Result<impl IntoResponse> {
    let message = state.message_service.find(id).await?;

    Ok(Json(MessageResponse::from(message)))
}

/// Lists one page of messages. `page` defaults to 0 and `size` to the configured default.
///
/// # Errors
/// Returns `AppError::InvalidArgument` if `page` or `size` is not a non-negative integer,
/// or if `size` is zero or above the configured maximum.
pub async fn list_messages(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ListQuery>,
) -> Result<impl IntoResponse> {
    let pagination = &state.config.pagination;
    let size = query.size.unwrap_or(pagination.default_page_size);
    if size == 0 || size > pagination.max_page_size {
        return Err(AppError::InvalidArgument(format!(
            "page size must be between 1 and {}",
            pagination.max_page_size
        )));
    }

    let page = state.message_service.list(PageRequest::new(query.page.unwrap_or(0), size)).await?;

    Ok(Json(PageResponse::from(page)))
}

/// Replaces a message. The body must carry the same `id` as the path.
///
/// # Errors
/// Returns `AppError::InvalidArgument` if the id or body is malformed, the ids differ, or a field is blank.
/// Returns `AppError::NotFound` if no message has this id.
pub async fn update_message(
    State(state): State<AppState>,
    MessageId(id): MessageId,
    ApiJson(payload): ApiJson<MessageRequest>,
) -> Result<impl IntoResponse> {
    let draft = MessageDraft::try_from(payload)?;
    let message = state.message_service.update(id, draft).await?;

    Ok((StatusCode::ACCEPTED, Json(MessageResponse::from(message))))
}

/// # Errors
/// Returns `AppError::InvalidArgument` if the id is malformed.
/// Returns `AppError::NotFound` if no message has this id.
pub async fn delete_message(State(state): State<AppState>, MessageId(id): MessageId) -> Result<impl IntoResponse> {
    state.message_service.delete(id).await?;

    Ok((StatusCode::OK, "message removed"))
}
