//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::AliasService;

/// State cloned into each request.
///
/// Holds the alias service and, through it, the single connection pool
/// created at startup. Nothing in here is mutated by handlers.
#[derive(Clone)]
pub struct AppState {
    pub alias_service: Arc<AliasService>,
}

impl AppState {
    pub fn new(alias_service: Arc<AliasService>) -> Self {
        Self { alias_service }
    }
}
