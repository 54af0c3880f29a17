//! Alias creation and resolution service.

use std::sync::Arc;

use serde_json::json;
use tracing::{debug, info, warn};
use url::Host;

use crate::domain::entities::{AliasRecord, AliasStats, NewAlias};
use crate::domain::host_verifier::{HostCheck, HostVerifier};
use crate::domain::repositories::AliasRepository;
use crate::error::AppError;
use crate::utils::alias_validator::validate_alias;
use crate::utils::url_validator::parse_target_url;

/// Service for creating and resolving aliases.
///
/// Holds the injected repository (and so the single shared connection pool)
/// and, when host verification is enabled, a [`HostVerifier`].
pub struct AliasService {
    repository: Arc<dyn AliasRepository>,
    host_verifier: Option<Arc<dyn HostVerifier>>,
    base_url: String,
}

impl AliasService {
    /// Creates a new alias service.
    ///
    /// `base_url` is the public prefix short links are built from.
    pub fn new(repository: Arc<dyn AliasRepository>, base_url: impl Into<String>) -> Self {
        Self {
            repository,
            host_verifier: None,
            base_url: base_url.into(),
        }
    }

    /// Enables the best-effort DNS check on creation.
    pub fn with_host_verifier(mut self, verifier: Arc<dyn HostVerifier>) -> Self {
        self.host_verifier = Some(verifier);
        self
    }

    /// Creates a new alias pointing at `url`.
    ///
    /// # Flow
    ///
    /// 1. Trim both fields; either being empty is `missing fields`
    /// 2. Check alias format
    /// 3. Parse the URL (absolute, http/https, with host)
    /// 4. Optionally check the host resolves
    /// 5. Ensure the unique index, look the alias up, insert
    ///
    /// The lookup in step 5 only gives a friendly early answer. The unique
    /// index decides races: a losing insert comes back as a conflict too.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for missing fields, a malformed alias,
    /// an invalid URL, or a host that definitely does not resolve.
    /// Returns [`AppError::Conflict`] if the alias is taken.
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn create_alias(
        &self,
        alias: Option<String>,
        url: Option<String>,
    ) -> Result<AliasRecord, AppError> {
        let alias = alias.as_deref().map(str::trim).unwrap_or_default();
        let url = url.as_deref().map(str::trim).unwrap_or_default();

        if alias.is_empty() || url.is_empty() {
            return Err(AppError::bad_request(
                "missing fields",
                json!({ "alias": !alias.is_empty(), "url": !url.is_empty() }),
            ));
        }

        validate_alias(alias)?;

        let parsed = parse_target_url(url).map_err(|e| {
            AppError::bad_request("invalid url", json!({ "reason": e.to_string() }))
        })?;

        if let Some(verifier) = &self.host_verifier
            && let Some(Host::Domain(host)) = parsed.host()
        {
            let port = parsed.port_or_known_default().unwrap_or(80);
            match verifier.check(host, port).await {
                HostCheck::Resolvable => {}
                HostCheck::Unresolvable => {
                    return Err(AppError::bad_request(
                        "domain unreachable",
                        json!({ "host": host }),
                    ));
                }
                HostCheck::Indeterminate => {
                    warn!(host, "Could not verify host, accepting URL");
                }
            }
        }

        self.repository.ensure_unique_index().await?;

        if self.repository.find_by_alias(alias).await?.is_some() {
            return Err(AppError::conflict(
                "alias already exists",
                json!({ "alias": alias }),
            ));
        }

        let record = self
            .repository
            .create_unique(NewAlias {
                alias: alias.to_string(),
                url: url.to_string(),
            })
            .await
            .map_err(|e| match e {
                AppError::Conflict { .. } => AppError::conflict(
                    "alias already exists",
                    json!({ "alias": alias }),
                ),
                other => other,
            })?;

        info!(alias = %record.alias, "Alias created");
        Ok(record)
    }

    /// Resolves an alias to its target URL and counts the click.
    ///
    /// Counting is best-effort: if the increment fails the failure is logged
    /// and the URL is still returned, so a store hiccup never blocks a
    /// redirect.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the alias does not exist.
    /// Returns [`AppError::Internal`] if the lookup itself fails.
    pub async fn resolve_alias(&self, alias: &str) -> Result<String, AppError> {
        let record = self.get_alias(alias).await?;

        match self.repository.increment_clicks(alias).await {
            Ok(true) => debug!(alias, "Click counted"),
            Ok(false) => warn!(alias, "Alias vanished before click was counted"),
            Err(e) => warn!(alias, error = %e, "Failed to count click"),
        }

        Ok(record.url)
    }

    /// Looks an alias up without counting a click.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the alias does not exist.
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn get_alias(&self, alias: &str) -> Result<AliasRecord, AppError> {
        self.repository
            .find_by_alias(alias)
            .await?
            .ok_or_else(|| AppError::not_found("alias not found", json!({ "alias": alias })))
    }

    /// Totals across all aliases.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn stats(&self) -> Result<AliasStats, AppError> {
        self.repository.stats().await
    }

    /// Checks that the store answers.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store is unreachable.
    pub async fn ping(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }

    /// Builds the public short link for an alias.
    pub fn short_url(&self, alias: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), alias)
    }
}
