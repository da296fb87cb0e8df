#![allow(clippy::unwrap_used, clippy::missing_panics_doc, unreachable_pub)]
mod common;

use async_trait::async_trait;
use axum::http::StatusCode;
use message_board::adapters::MessageStore;
use message_board::config::Config;
use message_board::domain::message::Message;
use message_board::domain::page::{Page, PageRequest};
use message_board::error::{AppError, Result};
use std::sync::Arc;
use uuid::Uuid;

/// A store whose backend is permanently unavailable.
#[derive(Debug)]
struct UnavailableStore;

#[async_trait]
impl MessageStore for UnavailableStore {
    async fn save(&self, _message: &Message) -> Result<Message> {
        Err(AppError::Database(sqlx::Error::PoolClosed))
    }

    async fn find_by_id(&self, _id: Uuid) -> Result<Option<Message>> {
        Err(AppError::Database(sqlx::Error::PoolClosed))
    }

    async fn find_all(&self, _request: PageRequest) -> Result<Page<Message>> {
        Err(AppError::Database(sqlx::Error::PoolClosed))
    }

    async fn delete_by_id(&self, _id: Uuid) -> Result<()> {
        Err(AppError::Database(sqlx::Error::PoolClosed))
    }

    async fn count(&self) -> Result<i64> {
        Err(AppError::Database(sqlx::Error::PoolClosed))
    }

    async fn ping(&self) -> Result<()> {
        Err(AppError::Database(sqlx::Error::PoolClosed))
    }
}

#[tokio::test]
async fn test_livez() {
    let app = common::TestApp::spawn().await;

    let resp = app.client.get(format!("{}/livez", app.mgmt_url)).send().await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_readyz_happy_path() {
    let app = common::TestApp::spawn().await;

    let resp = app.client.get(format!("{}/readyz", app.mgmt_url)).send().await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"], "ok");
}

#[tokio::test]
async fn test_readyz_database_error() {
    let app = common::TestApp::spawn_with_store(Config::default(), Arc::new(UnavailableStore)).await;

    let resp = app.client.get(format!("{}/readyz", app.mgmt_url)).send().await.unwrap();

    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "error");
    assert_eq!(body["database"], "error");
}

#[tokio::test]
async fn test_store_failure_is_internal_error() {
    let app = common::TestApp::spawn_with_store(Config::default(), Arc::new(UnavailableStore)).await;

    let resp = app.client.get(format!("{}/messages/{}", app.server_url, Uuid::new_v4())).send().await.unwrap();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "Internal server error");
}
