//! Validation rules for user-chosen aliases.

use crate::error::AppError;
use regex::Regex;
use serde_json::json;
use std::sync::LazyLock;

/// Longest alias accepted.
pub const MAX_ALIAS_LENGTH: usize = 64;

/// Aliases that would shadow fixed routes.
pub const RESERVED_ALIASES: &[&str] = &["api", "health"];

static ALIAS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("alias regex is valid"));

/// Validates an already-trimmed, non-empty alias.
///
/// # Rules
///
/// - At most [`MAX_ALIAS_LENGTH`] characters
/// - Letters, digits, `-` and `_` only, so the alias is a single path segment
/// - Not one of [`RESERVED_ALIASES`] (compared case-insensitively)
///
/// # Errors
///
/// Returns [`AppError::Validation`] if any rule is violated.
pub fn validate_alias(alias: &str) -> Result<(), AppError> {
    if alias.chars().count() > MAX_ALIAS_LENGTH {
        return Err(AppError::bad_request(
            format!("alias must be at most {MAX_ALIAS_LENGTH} characters"),
            json!({ "provided_length": alias.chars().count() }),
        ));
    }

    if !ALIAS_REGEX.is_match(alias) {
        return Err(AppError::bad_request(
            "alias can only contain letters, digits, hyphens and underscores",
            json!({ "alias": alias }),
        ));
    }

    if RESERVED_ALIASES
        .iter()
        .any(|reserved| reserved.eq_ignore_ascii_case(alias))
    {
        return Err(AppError::bad_request(
            "alias is reserved",
            json!({ "alias": alias }),
        ));
    }

    Ok(())
}
