#![allow(dead_code)]

use alias_shortener::application::services::AliasService;
use alias_shortener::domain::entities::{AliasRecord, AliasStats, NewAlias};
use alias_shortener::domain::repositories::AliasRepository;
use alias_shortener::error::AppError;
use alias_shortener::infrastructure::persistence::InMemoryAliasRepository;
use alias_shortener::routes;
use alias_shortener::state::AppState;
use async_trait::async_trait;
use axum_test::TestServer;
use serde_json::json;
use std::sync::Arc;

pub const BASE_URL: &str = "https://s.example.com";

pub fn create_test_state(repository: Arc<dyn AliasRepository>) -> AppState {
    let service = AliasService::new(repository, BASE_URL);
    AppState::new(Arc::new(service))
}

/// Server over a fresh in-memory store; the store is returned for inspection.
pub fn create_test_server() -> (TestServer, Arc<InMemoryAliasRepository>) {
    let repository = Arc::new(InMemoryAliasRepository::new());
    let server = server_with(repository.clone());
    (server, repository)
}

pub fn server_with(repository: Arc<dyn AliasRepository>) -> TestServer {
    let app = routes::router(create_test_state(repository));
    TestServer::new(app).unwrap()
}

pub async fn create_alias(server: &TestServer, alias: &str, url: &str) {
    server
        .post("/api/shorten")
        .json(&json!({ "alias": alias, "url": url }))
        .await
        .assert_status(axum::http::StatusCode::CREATED);
}

/// Store whose every call fails, as if the database were down.
pub struct UnavailableRepository;

fn unavailable() -> AppError {
    AppError::internal("Database error", json!({ "reason": "connection refused" }))
}

#[async_trait]
impl AliasRepository for UnavailableRepository {
    async fn ensure_unique_index(&self) -> Result<(), AppError> {
        Err(unavailable())
    }

    async fn create_unique(&self, _new_alias: NewAlias) -> Result<AliasRecord, AppError> {
        Err(unavailable())
    }

    async fn find_by_alias(&self, _alias: &str) -> Result<Option<AliasRecord>, AppError> {
        Err(unavailable())
    }

    async fn increment_clicks(&self, _alias: &str) -> Result<bool, AppError> {
        Err(unavailable())
    }

    async fn stats(&self) -> Result<AliasStats, AppError> {
        Err(unavailable())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Err(unavailable())
    }
}

/// In-memory store whose click counter cannot be written.
#[derive(Default)]
pub struct ReadOnlyClicksRepository {
    pub inner: InMemoryAliasRepository,
}

#[async_trait]
impl AliasRepository for ReadOnlyClicksRepository {
    async fn ensure_unique_index(&self) -> Result<(), AppError> {
        self.inner.ensure_unique_index().await
    }

    async fn create_unique(&self, new_alias: NewAlias) -> Result<AliasRecord, AppError> {
        self.inner.create_unique(new_alias).await
    }

    async fn find_by_alias(&self, alias: &str) -> Result<Option<AliasRecord>, AppError> {
        self.inner.find_by_alias(alias).await
    }

    async fn increment_clicks(&self, _alias: &str) -> Result<bool, AppError> {
        Err(unavailable())
    }

    async fn stats(&self) -> Result<AliasStats, AppError> {
        self.inner.stats().await
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.inner.ping().await
    }
}
