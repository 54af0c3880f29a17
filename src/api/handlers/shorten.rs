//! Handler for the alias creation endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection, http::StatusCode};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a new alias.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "alias": "abc", "url": "https://example.com" }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// {
///   "message": "URL shortened successfully!",
///   "alias": "abc",
///   "url": "https://example.com",
///   "short_url": "https://s.example.com/abc"
/// }
/// ```
///
/// # Errors
///
/// - `400` with `missing fields`, `invalid url`, `domain unreachable`, an alias
///   format message, or `alias already exists`
/// - `400` if the body is not valid JSON
/// - `500` on store failures
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    let Json(payload) = payload?;
    let payload = payload.trimmed();
    payload.validate()?;

    let record = state
        .alias_service
        .create_alias(payload.alias, payload.url)
        .await?;

    let short_url = state.alias_service.short_url(&record.alias);

    Ok((
        StatusCode::CREATED,
        Json(ShortenResponse {
            message: "URL shortened successfully!".to_string(),
            alias: record.alias,
            url: record.url,
            short_url,
        }),
    ))
}
