//! CLI administration tool for shortlink.
//!
//! Manages aliases and inspects the SQLite store directly, without going
//! through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Bind an alias
//! cargo run --bin admin -- url save https://example.com ex1
//!
//! # Resolve an alias
//! cargo run --bin admin -- url get ex1
//!
//! # Remove an alias
//! cargo run --bin admin -- url delete ex1
//!
//! # Check the store
//! cargo run --bin admin -- db check
//! cargo run --bin admin -- db info
//! ```
//!
//! # Environment Variables
//!
//! - `STORAGE_PATH` (required unless `--storage` is given): SQLite database file

use shortlink::domain::errors::StorageError;
use shortlink::domain::repositories::UrlRepository;
use shortlink::infrastructure::persistence::{SqliteUrlRepository, StorageOptions};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;

/// CLI tool for managing shortlink.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// SQLite database file
    #[arg(long, env = "STORAGE_PATH")]
    storage: String,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage aliases
    Url {
        #[command(subcommand)]
        action: UrlAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Alias management subcommands.
#[derive(Subcommand)]
enum UrlAction {
    /// Bind an alias to a URL
    Save {
        /// Target URL
        url: String,
        /// Alias to bind
        alias: String,
    },

    /// Resolve an alias
    Get {
        alias: String,
    },

    /// Remove an alias
    Delete {
        alias: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Open the store, creating the schema if needed
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let repo = SqliteUrlRepository::open(&StorageOptions::new(&cli.storage))
        .await
        .with_context(|| format!("Failed to open storage at {}", cli.storage))?;

    let result = match cli.command {
        Commands::Url { action } => handle_url_action(action, &repo).await,
        Commands::Db { action } => handle_db_action(action, &repo, &cli.storage).await,
    };

    repo.close().await;
    result
}

/// Dispatches alias management commands.
async fn handle_url_action(action: UrlAction, repo: &SqliteUrlRepository) -> Result<()> {
    match action {
        UrlAction::Save { url, alias } => save_url(repo, &url, &alias).await,
        UrlAction::Get { alias } => get_url(repo, &alias).await,
        UrlAction::Delete { alias, yes } => delete_url(repo, &alias, yes).await,
    }
}

async fn save_url(repo: &SqliteUrlRepository, url: &str, alias: &str) -> Result<()> {
    match repo.save(url, alias).await {
        Ok(id) => {
            println!("{}", "✅ Alias created".green().bold());
            println!("  Alias:  {}", alias.cyan());
            println!("  URL:    {}", url.bright_white());
            println!("  ID:     {}", id.to_string().bright_black());
            Ok(())
        }
        Err(StorageError::AliasExists { .. }) => {
            anyhow::bail!("Alias '{}' already exists", alias)
        }
        Err(e) => Err(anyhow::Error::new(e).context("Failed to save alias")),
    }
}

async fn get_url(repo: &SqliteUrlRepository, alias: &str) -> Result<()> {
    match repo.get(alias).await {
        Ok(target) => {
            println!("  {} → {}", alias.cyan(), target.bright_white());
            Ok(())
        }
        Err(StorageError::NotFound { .. }) => {
            println!("{}", format!("⚠️  Alias '{}' not found", alias).yellow());
            Ok(())
        }
        Err(e) => Err(anyhow::Error::new(e).context("Failed to resolve alias")),
    }
}

/// Removes an alias after confirmation (default: No).
async fn delete_url(repo: &SqliteUrlRepository, alias: &str, skip_confirm: bool) -> Result<()> {
    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete alias '{}'?", alias))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let affected = repo
        .delete(alias)
        .await
        .context("Failed to delete alias")?;

    if affected == 0 {
        println!("{}", format!("⚠️  Alias '{}' did not exist", alias).yellow());
    } else {
        println!("{}", "✅ Alias deleted".green().bold());
    }

    Ok(())
}

/// Dispatches database commands.
async fn handle_db_action(
    action: DbAction,
    repo: &SqliteUrlRepository,
    storage: &str,
) -> Result<()> {
    match action {
        DbAction::Check => {
            // Opening the repository already created and verified the schema.
            println!("{}", "✅ Storage OK".green().bold());
            println!("  Path: {}", storage.cyan());
        }
        DbAction::Info => {
            let records: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM url")
                .fetch_one(repo.pool())
                .await?;
            let version: String = sqlx::query_scalar("SELECT sqlite_version()")
                .fetch_one(repo.pool())
                .await?;

            println!("{}", "📊 Storage info".bright_blue().bold());
            println!();
            println!("  Path:           {}", storage.cyan());
            println!("  SQLite version: {}", version.bright_white());
            println!(
                "  Aliases:        {}",
                records.to_string().bright_white().bold()
            );
        }
    }

    Ok(())
}
