//! DTOs for the alias creation endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to create an alias.
///
/// Both fields are optional at the wire level so an absent field is reported
/// as `missing fields` by the service rather than as a body parse error.
/// The URL cap is checked here on the trimmed value; emptiness and alias
/// format are checked by the service.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct ShortenRequest {
    #[serde(default)]
    pub alias: Option<String>,

    #[serde(default)]
    #[validate(length(max = 2048))]
    pub url: Option<String>,
}

impl ShortenRequest {
    /// Strips surrounding whitespace from both fields.
    pub fn trimmed(self) -> Self {
        Self {
            alias: self.alias.map(|a| a.trim().to_string()),
            url: self.url.map(|u| u.trim().to_string()),
        }
    }
}

/// Response for a created alias.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub message: String,
    pub alias: String,
    pub url: String,
    pub short_url: String,
}
