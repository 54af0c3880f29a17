//! HTTP server initialization and runtime setup.
//!
//! Opens the connection pool, applies migrations, wires the repository into
//! the service, and runs Axum until a shutdown signal arrives.

use crate::application::services::AliasService;
use crate::config::Config;
use crate::infrastructure::dns::DnsHostVerifier;
use crate::infrastructure::persistence::{self, PgAliasRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Builds the alias service over an already-open pool.
///
/// Shared by the server and the admin binary so both apply the same rules.
pub fn build_alias_service(pool: Arc<sqlx::PgPool>, config: &Config) -> AliasService {
    let repository = Arc::new(PgAliasRepository::new(pool));
    let service = AliasService::new(repository, config.base_url.clone());

    if config.verify_url_host {
        let verifier = DnsHostVerifier::new(Duration::from_millis(config.dns_lookup_timeout_ms));
        service.with_host_verifier(Arc::new(verifier))
    } else {
        service
    }
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool (once, shared by every request)
/// - Migrations
/// - Alias service
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = persistence::connect(&config)
        .await
        .context("Failed to open database pool")?;
    tracing::info!("Connected to database");

    persistence::migrate(&pool)
        .await
        .context("Failed to apply migrations")?;
    tracing::info!("Migrations applied");

    let alias_service = build_alias_service(Arc::new(pool), &config);
    let state = AppState::new(Arc::new(alias_service));

    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
