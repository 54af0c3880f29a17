//! DTO for the alias lookup endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Read-only view of an alias, including its click count.
#[derive(Debug, Serialize)]
pub struct AliasResponse {
    pub alias: String,
    pub url: String,
    pub short_url: String,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
}
