//! Process-local alias repository.
//!
//! Backed by a [`DashMap`], whose entry API gives the same guarantees the
//! PostgreSQL repository gets from its unique index and atomic `UPDATE`:
//! at most one record per alias, and no lost click increments.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use serde_json::json;

use crate::domain::entities::{AliasRecord, AliasStats, NewAlias};
use crate::domain::repositories::AliasRepository;
use crate::error::AppError;

#[derive(Debug, Default)]
pub struct InMemoryAliasRepository {
    records: DashMap<String, AliasRecord>,
}

impl InMemoryAliasRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl AliasRepository for InMemoryAliasRepository {
    async fn ensure_unique_index(&self) -> Result<(), AppError> {
        Ok(())
    }

    async fn create_unique(&self, new_alias: NewAlias) -> Result<AliasRecord, AppError> {
        match self.records.entry(new_alias.alias.clone()) {
            Entry::Occupied(_) => Err(AppError::conflict(
                "alias already exists",
                json!({ "alias": new_alias.alias }),
            )),
            Entry::Vacant(slot) => {
                let record = AliasRecord::fresh(new_alias, Utc::now());
                slot.insert(record.clone());
                Ok(record)
            }
        }
    }

    async fn find_by_alias(&self, alias: &str) -> Result<Option<AliasRecord>, AppError> {
        Ok(self.records.get(alias).map(|r| r.value().clone()))
    }

    async fn increment_clicks(&self, alias: &str) -> Result<bool, AppError> {
        match self.records.get_mut(alias) {
            Some(mut record) => {
                record.clicks += 1;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn stats(&self) -> Result<AliasStats, AppError> {
        Ok(self
            .records
            .iter()
            .fold(AliasStats::default(), |acc, r| AliasStats {
                aliases: acc.aliases + 1,
                clicks: acc.clicks + r.clicks,
            }))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
