//! Repository trait for alias storage.

use crate::domain::entities::{AliasRecord, AliasStats, NewAlias};
use crate::error::AppError;
use async_trait::async_trait;

/// Store capabilities required by [`crate::application::services::AliasService`].
///
/// Correctness of alias creation rests on [`create_unique`](Self::create_unique)
/// and correctness of click counting on
/// [`increment_clicks`](Self::increment_clicks). Both must be enforced by the
/// store itself; callers never lock.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AliasRepository: Send + Sync {
    /// Makes sure the unique constraint on `alias` exists.
    ///
    /// Idempotent; safe to call before every insert.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn ensure_unique_index(&self) -> Result<(), AppError>;

    /// Inserts a record with `clicks = 0` and `created_at = now`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if a record with the same alias exists,
    /// including when another writer won the race between lookup and insert.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create_unique(&self, new_alias: NewAlias) -> Result<AliasRecord, AppError>;

    /// Finds a record by exact alias match.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_alias(&self, alias: &str) -> Result<Option<AliasRecord>, AppError>;

    /// Atomically adds one to the record's click counter.
    ///
    /// Returns `Ok(false)` if no record matched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn increment_clicks(&self, alias: &str) -> Result<bool, AppError>;

    /// Totals across all records.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn stats(&self) -> Result<AliasStats, AppError>;

    /// Round-trips to the store to check connectivity.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store cannot be reached.
    async fn ping(&self) -> Result<(), AppError>;
}
