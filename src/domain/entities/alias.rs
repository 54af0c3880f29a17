//! Alias entity mapping a user-chosen alias to a target URL.

use chrono::{DateTime, Utc};

/// A persisted alias.
///
/// `alias`, `url` and `created_at` never change after insertion. `clicks` is
/// only ever incremented, by one per successful resolve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasRecord {
    pub alias: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
    pub clicks: i64,
}

impl AliasRecord {
    /// Builds the record as it looks right after insertion.
    pub fn fresh(new_alias: NewAlias, created_at: DateTime<Utc>) -> Self {
        Self {
            alias: new_alias.alias,
            url: new_alias.url,
            created_at,
            clicks: 0,
        }
    }
}

/// Validated input for creating an alias.
///
/// Values are already trimmed; the service is responsible for that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAlias {
    pub alias: String,
    pub url: String,
}

/// Totals across the whole store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AliasStats {
    pub aliases: i64,
    pub clicks: i64,
}
