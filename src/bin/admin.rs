//! CLI administration tool for alias-shortener.
//!
//! Creates and inspects aliases and checks the database without going through
//! the HTTP API. Creation goes through the same service as `POST /api/shorten`,
//! so every validation rule applies.
//!
//! # Usage
//!
//! ```bash
//! # Create an alias
//! cargo run --bin admin -- alias create abc https://example.com
//!
//! # Show an alias and its click count
//! cargo run --bin admin -- alias show abc
//!
//! # Totals
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same database settings as the server (`DATABASE_URL` or `DB_*`).

use alias_shortener::application::services::AliasService;
use alias_shortener::config;
use alias_shortener::infrastructure::persistence;
use alias_shortener::server::build_alias_service;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing alias-shortener.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage aliases
    Alias {
        #[command(subcommand)]
        action: AliasAction,
    },

    /// Show totals
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Alias subcommands.
#[derive(Subcommand)]
enum AliasAction {
    /// Create a new alias
    Create {
        /// Alias to create
        alias: String,

        /// Target URL
        url: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Show an alias and its click count
    Show {
        /// Alias to look up
        alias: String,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Apply pending migrations
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let pool = persistence::connect(&config)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Alias { action } => {
            let service = build_alias_service(Arc::new(pool), &config);
            handle_alias_action(action, &service).await?
        }
        Commands::Stats => {
            let service = build_alias_service(Arc::new(pool), &config);
            handle_stats(&service).await?
        }
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches alias commands.
async fn handle_alias_action(action: AliasAction, service: &AliasService) -> Result<()> {
    match action {
        AliasAction::Create { alias, url, yes } => create_alias(service, alias, url, yes).await,
        AliasAction::Show { alias } => show_alias(service, &alias).await,
    }
}

/// Creates an alias after an optional confirmation prompt.
async fn create_alias(
    service: &AliasService,
    alias: String,
    url: String,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "Create alias".bright_blue().bold());
    println!();
    println!("  Alias: {}", alias.cyan());
    println!("  URL:   {}", url.bright_white());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Create this alias?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    let record = service
        .create_alias(Some(alias), Some(url))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create alias: {}", e.message()))?;

    println!("{}", "Alias created".green().bold());
    println!(
        "  Short link: {}",
        service.short_url(&record.alias).bright_yellow()
    );
    println!();

    Ok(())
}

/// Prints a single alias with its click count.
async fn show_alias(service: &AliasService, alias: &str) -> Result<()> {
    let record = service
        .get_alias(alias)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e.message()))?;

    println!("  Alias:   {}", record.alias.cyan());
    println!("  URL:     {}", record.url.bright_white());
    println!(
        "  Created: {}",
        record
            .created_at
            .format("%Y-%m-%d %H:%M")
            .to_string()
            .bright_black()
    );
    println!(
        "  Clicks:  {}",
        record.clicks.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Displays store-wide totals.
async fn handle_stats(service: &AliasService) -> Result<()> {
    println!("{}", "Statistics".bright_blue().bold());
    println!();

    let stats = service
        .stats()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to load statistics: {}", e))?;

    println!(
        "  Aliases: {}",
        stats.aliases.to_string().bright_green().bold()
    );
    println!(
        "  Clicks:  {}",
        stats.clicks.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").execute(pool).await?;

            println!("{}", "Database connection OK".green().bold());
        }
        DbAction::Migrate => {
            persistence::migrate(pool)
                .await
                .context("Failed to apply migrations")?;

            println!("{}", "Migrations applied".green().bold());
        }
    }

    Ok(())
}
