//! Handler for reading a single alias.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::alias::AliasResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns an alias with its click count. Does not count as a click.
///
/// # Endpoint
///
/// `GET /api/aliases/{alias}`
///
/// # Errors
///
/// Returns 404 Not Found if the alias doesn't exist.
pub async fn alias_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<AliasResponse>, AppError> {
    let record = state.alias_service.get_alias(&alias).await?;
    let short_url = state.alias_service.short_url(&record.alias);

    Ok(Json(AliasResponse {
        alias: record.alias,
        url: record.url,
        short_url,
        clicks: record.clicks,
        created_at: record.created_at,
    }))
}
