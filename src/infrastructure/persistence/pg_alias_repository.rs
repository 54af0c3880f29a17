//! PostgreSQL implementation of the alias repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;
use tokio::sync::OnceCell;

use crate::domain::entities::{AliasRecord, AliasStats, NewAlias};
use crate::domain::repositories::AliasRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct AliasRow {
    alias: String,
    url: String,
    created_at: DateTime<Utc>,
    clicks: i64,
}

impl From<AliasRow> for AliasRecord {
    fn from(row: AliasRow) -> Self {
        AliasRecord {
            alias: row.alias,
            url: row.url,
            created_at: row.created_at,
            clicks: row.clicks,
        }
    }
}

#[derive(sqlx::FromRow)]
struct StatsRow {
    aliases: i64,
    clicks: i64,
}

/// PostgreSQL repository for alias records.
///
/// Uniqueness is enforced by the `aliases_alias_key` unique index and click
/// counting by a single `UPDATE ... SET clicks = clicks + 1`.
pub struct PgAliasRepository {
    pool: Arc<PgPool>,
    unique_index: OnceCell<()>,
}

impl PgAliasRepository {
    /// Creates a new repository over a shared connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self {
            pool,
            unique_index: OnceCell::new(),
        }
    }
}

#[async_trait]
impl AliasRepository for PgAliasRepository {
    async fn ensure_unique_index(&self) -> Result<(), AppError> {
        // Runs the DDL at most once per process; later calls are free.
        self.unique_index
            .get_or_try_init(|| async {
                sqlx::query(
                    "CREATE UNIQUE INDEX IF NOT EXISTS aliases_alias_key ON aliases (alias)",
                )
                .execute(self.pool.as_ref())
                .await
                .map(|_| ())
            })
            .await?;

        Ok(())
    }

    async fn create_unique(&self, new_alias: NewAlias) -> Result<AliasRecord, AppError> {
        let row = sqlx::query_as::<_, AliasRow>(
            r#"
            INSERT INTO aliases (alias, url, created_at, clicks)
            VALUES ($1, $2, NOW(), 0)
            RETURNING alias, url, created_at, clicks
            "#,
        )
        .bind(&new_alias.alias)
        .bind(&new_alias.url)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_alias(&self, alias: &str) -> Result<Option<AliasRecord>, AppError> {
        let row = sqlx::query_as::<_, AliasRow>(
            r#"
            SELECT alias, url, created_at, clicks
            FROM aliases
            WHERE alias = $1
            "#,
        )
        .bind(alias)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(AliasRecord::from))
    }

    async fn increment_clicks(&self, alias: &str) -> Result<bool, AppError> {
        let result = sqlx::query("UPDATE aliases SET clicks = clicks + 1 WHERE alias = $1")
            .bind(alias)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn stats(&self) -> Result<AliasStats, AppError> {
        let row = sqlx::query_as::<_, StatsRow>(
            r#"
            SELECT COUNT(*)::BIGINT AS aliases, COALESCE(SUM(clicks), 0)::BIGINT AS clicks
            FROM aliases
            "#,
        )
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(AliasStats {
            aliases: row.aliases,
            clicks: row.clicks,
        })
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await?;
        Ok(())
    }
}
