//! CLI administration tool for drop-reg.
//!
//! Works directly against the database, so it can be used while the server
//! is running or stopped.
//!
//! # Usage
//!
//! ```bash
//! # Counts of users, active sessions and active links
//! cargo run --bin admin -- stats
//!
//! # Links owned by a Discord user
//! cargo run --bin admin -- links list --owner 80351110224678912
//!
//! # Delete expired sessions / links
//! cargo run --bin admin -- sessions purge
//! cargo run --bin admin -- links purge -y
//!
//! # Check connectivity and migrations, or apply pending migrations
//! cargo run --bin admin -- db check
//! cargo run --bin admin -- db migrate
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (default: `sqlite://drop-reg.db`)

use drop_reg::domain::repositories::{MappingRepository, SessionRepository, UserRepository};
use drop_reg::infrastructure::persistence::{
    self, SqliteMappingRepository, SqliteSessionRepository, SqliteUserRepository,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::SqlitePool;
use std::sync::Arc;
use std::time::Duration;

/// CLI tool for managing drop-reg.
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
    /// Show statistics
    Stats,

    /// Manage short links
    Links {
        #[command(subcommand)]
        action: LinksAction,
    },

    /// Manage login sessions
    Sessions {
        #[command(subcommand)]
        action: SessionsAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Short link subcommands.
#[derive(Subcommand)]
enum LinksAction {
    /// List a user's active links
    List {
        /// Discord user id of the owner
        #[arg(short, long)]
        owner: String,
    },

    /// Delete expired links
    Purge {
        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Session subcommands.
#[derive(Subcommand)]
enum SessionsAction {
    /// Delete expired sessions
    Purge {
        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection and migration status
    Check,

    /// Apply pending migrations
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://drop-reg.db".to_string());

    let pool = persistence::connect(&database_url, 1, Duration::from_secs(30))
        .await
        .with_context(|| format!("Failed to open database {database_url}"))?;

    match cli.command {
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Links { action } => handle_links_action(action, &pool).await?,
        Commands::Sessions { action } => handle_sessions_action(action, &pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    pool.close().await;

    Ok(())
}

/// Displays user, session and link counts.
async fn handle_stats(pool: &SqlitePool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let pool = Arc::new(pool.clone());
    let users = SqliteUserRepository::new(pool.clone())
        .count()
        .await
        .context("Failed to count users")?;
    let sessions = SqliteSessionRepository::new(pool.clone())
        .count_active()
        .await
        .context("Failed to count sessions")?;
    let links = SqliteMappingRepository::new(pool)
        .count_active()
        .await
        .context("Failed to count links")?;

    println!(
        "  Users:           {}",
        users.to_string().bright_green().bold()
    );
    println!(
        "  Active sessions: {}",
        sessions.to_string().bright_green().bold()
    );
    println!(
        "  Active links:    {}",
        links.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Dispatches short link commands.
async fn handle_links_action(action: LinksAction, pool: &SqlitePool) -> Result<()> {
    let repo = SqliteMappingRepository::new(Arc::new(pool.clone()));

    match action {
        LinksAction::List { owner } => list_links(&repo, &owner).await,
        LinksAction::Purge { yes } => {
            if !confirm("Delete all expired links?", yes)? {
                return Ok(());
            }
            let purged = repo
                .purge_expired()
                .await
                .context("Failed to purge links")?;
            println!(
                "{} {}",
                "✅ Expired links deleted:".green().bold(),
                purged.to_string().bright_white()
            );
            Ok(())
        }
    }
}

/// Lists an owner's active links, newest first.
///
/// # Output Format
///
/// ```text
/// 🔗 Links owned by 80351110224678912
///
///   Code                 Target                                   Created
///   ────────────────────────────────────────────────────────────────────────────
///   597                  https://discord.gg/abc                   2025-06-01 14:05
/// ```
async fn list_links(repo: &SqliteMappingRepository, owner: &str) -> Result<()> {
    println!(
        "{} {}",
        "🔗 Links owned by".bright_blue().bold(),
        owner.cyan()
    );
    println!();

    let links = repo
        .list_active_by_owner(owner)
        .await
        .context("Failed to list links")?;

    if links.is_empty() {
        println!("{}", "  No links found".yellow());
        return Ok(());
    }

    println!(
        "  {:<20} {:<40} {:<16}",
        "Code".bright_white().bold(),
        "Target".bright_white().bold(),
        "Created".bright_white().bold()
    );
    println!("  {}", "─".repeat(78).bright_black());

    for link in &links {
        println!(
            "  {:<20} {:<40} {}",
            link.short_code.cyan(),
            link.discord_url,
            link.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black()
        );
    }

    println!();
    println!("  Total: {}", links.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Dispatches session commands.
async fn handle_sessions_action(action: SessionsAction, pool: &SqlitePool) -> Result<()> {
    let repo = SqliteSessionRepository::new(Arc::new(pool.clone()));

    match action {
        SessionsAction::Purge { yes } => {
            if !confirm("Delete all expired sessions?", yes)? {
                return Ok(());
            }
            let purged = repo
                .purge_expired()
                .await
                .context("Failed to purge sessions")?;
            println!(
                "{} {}",
                "✅ Expired sessions deleted:".green().bold(),
                purged.to_string().bright_white()
            );
        }
    }

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &SqlitePool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;
            println!("{}", "✅ Database connection OK".green().bold());

            let pending = persistence::pending_migrations(pool)
                .await
                .context("Failed to read migration status")?;
            if pending.is_empty() {
                println!("{}", "✅ All migrations applied".green().bold());
            } else {
                println!(
                    "{}",
                    "⚠️  Pending migrations (run `admin db migrate`):".yellow()
                );
                for description in pending {
                    println!("  - {}", description.bright_white());
                }
            }
        }
        DbAction::Migrate => {
            println!("{}", "🛠  Applying migrations...".bright_blue());

            persistence::migrate(pool)
                .await
                .context("Failed to apply migrations")?;

            println!("{}", "✅ Migrations applied".green().bold());
        }
    }

    Ok(())
}

/// Asks for confirmation unless `skip` is set. Default: No.
fn confirm(prompt: &str, skip: bool) -> Result<bool> {
    if skip {
        return Ok(true);
    }

    let confirmed = Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()?;

    if !confirmed {
        println!("{}", "❌ Cancelled".red());
    }

    Ok(confirmed)
}
