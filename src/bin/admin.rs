//! CLI administration tool for shorten-url.
//!
//! Provides commands for managing users, inspecting mappings, viewing
//! statistics, and performing database operations without HTTP access.
//!
//! # Usage
//!
//! ```bash
//! # Create a user (prompts for missing values)
//! cargo run --bin admin -- user create --username alice
//!
//! # List a user's mappings
//! cargo run --bin admin -- mapping list --owner 1
//!
//! # Show one mapping with its click count
//! cargo run --bin admin -- mapping show aZ3k9Q
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check the connection or apply migrations
//! cargo run --bin admin -- db check
//! cargo run --bin admin -- db migrate
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string
//! - `BASE_URL` (optional): prefix used when printing short URLs
//! - `SESSION_SECRET` (optional): when set, `user create` also prints a token

use shorten_url::application::services::{AuthService, MappingService};
use shorten_url::infrastructure::persistence::{
    PgMappingRepository, PgUserRepository, run_migrations,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input, Password};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing shorten-url.
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
    /// Manage users
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Inspect URL mappings
    Mapping {
        #[command(subcommand)]
        action: MappingAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

#[derive(Subcommand)]
enum UserAction {
    /// Create a new user
    Create {
        #[arg(short, long)]
        username: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum MappingAction {
    /// List mappings owned by a user
    List {
        /// Owner user ID
        #[arg(short, long)]
        owner: i64,
    },

    /// Show a mapping with its click statistics
    Show {
        /// Short code
        id: String,
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

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::User { action } => handle_user_action(action, &pool).await?,
        Commands::Mapping { action } => handle_mapping_action(action, &pool).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

async fn handle_user_action(action: UserAction, pool: &PgPool) -> Result<()> {
    match action {
        UserAction::Create { username, yes } => create_user(pool, username, yes).await,
    }
}

/// Creates a user with interactive prompts.
///
/// The password is always read from the terminal so it never lands in
/// shell history.
async fn create_user(pool: &PgPool, username: Option<String>, skip_confirm: bool) -> Result<()> {
    println!("{}", "👤 Create User".bright_blue().bold());
    println!();

    let username = match username {
        Some(u) => u,
        None => Input::new().with_prompt("Username").interact_text()?,
    };
    let username = username.trim().to_string();

    let password = Password::new()
        .with_prompt("Password")
        .with_confirmation("Repeat password", "Passwords do not match")
        .interact()?;

    if !(3..=32).contains(&username.chars().count()) {
        anyhow::bail!("Username must be 3-32 characters");
    }
    if !(8..=128).contains(&password.chars().count()) {
        anyhow::bail!("Password must be 8-128 characters");
    }

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt(format!("Create user '{username}'?"))
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let secret = std::env::var("SESSION_SECRET").unwrap_or_default();
    let users = Arc::new(PgUserRepository::new(Arc::new(pool.clone())));
    let auth = AuthService::new(users, secret.clone());

    let user = auth
        .register(&username, &password)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create user: {}", e))?;

    println!();
    println!("{}", "✅ User created successfully!".green().bold());
    println!("  ID:       {}", user.id.to_string().bright_white().bold());
    println!("  Username: {}", user.username.cyan());

    if !secret.is_empty() {
        println!();
        println!("{}", "Add this to your requests:".bright_white());
        println!(
            "  {}: Bearer {}",
            "Authorization".bright_cyan(),
            auth.issue_token(user.id).bright_yellow()
        );
    }
    println!();

    Ok(())
}

async fn handle_mapping_action(action: MappingAction, pool: &PgPool) -> Result<()> {
    let base_url =
        std::env::var("BASE_URL").unwrap_or_else(|_| "http://localhost:8080".to_string());
    let service = MappingService::new(Arc::new(PgMappingRepository::new(Arc::new(
        pool.clone(),
    ))));

    match action {
        MappingAction::List { owner } => {
            println!("{}", "📋 URL Mappings".bright_blue().bold());
            println!();

            let mappings = service
                .list_for_owner(owner)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to list mappings: {}", e))?;

            if mappings.is_empty() {
                println!("{}", "  No mappings found".yellow());
                return Ok(());
            }

            println!(
                "  {:<8} {:<20} {}",
                "Code".bright_white().bold(),
                "Created".bright_white().bold(),
                "Target".bright_white().bold()
            );
            println!("  {}", "─".repeat(75).bright_black());

            for mapping in &mappings {
                println!(
                    "  {:<8} {:<20} {}",
                    mapping.id.cyan(),
                    mapping
                        .created_on
                        .format("%Y-%m-%d %H:%M")
                        .to_string()
                        .bright_black(),
                    mapping.origin_url
                );
            }

            println!();
            println!(
                "  Total: {}",
                mappings.len().to_string().bright_white().bold()
            );
            println!();
        }
        MappingAction::Show { id } => {
            let details = service
                .details(&id)
                .await
                .map_err(|e| anyhow::anyhow!("{}", e))?;

            println!("{}", "🔗 URL Mapping".bright_blue().bold());
            println!();
            println!(
                "  Short URL:   {}",
                details.mapping.short_url(&base_url).bright_yellow()
            );
            println!("  Target:      {}", details.mapping.origin_url);
            println!("  Owner:       {}", details.mapping.owner_id);
            println!(
                "  Clicks:      {}",
                details
                    .action_record
                    .click_count
                    .to_string()
                    .bright_green()
                    .bold()
            );
            println!(
                "  Last access: {}",
                details.action_record.last_access.format("%Y-%m-%d %H:%M:%S")
            );
            println!(
                "  Created:     {}",
                details.mapping.created_on.format("%Y-%m-%d %H:%M:%S")
            );
            println!();
        }
    }

    Ok(())
}

/// Displays user, mapping and click totals.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let users_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await?;

    let mappings_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM url_mappings")
        .fetch_one(pool)
        .await?;

    let clicks_count: i64 = sqlx::query_scalar(
        "SELECT COALESCE(SUM(click_count), 0)::BIGINT FROM url_mapping_action_records",
    )
    .fetch_one(pool)
    .await?;

    println!(
        "  Users:    {}",
        users_count.to_string().bright_green().bold()
    );
    println!(
        "  Mappings: {}",
        mappings_count.to_string().bright_green().bold()
    );
    println!(
        "  Clicks:   {}",
        clicks_count.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("{}", "✅ Database connection OK".green().bold());
            println!("  PostgreSQL: {}", version.bright_white());
        }
        DbAction::Migrate => {
            println!("{}", "🛠  Applying migrations...".bright_blue());

            run_migrations(pool).await?;

            println!("{}", "✅ Migrations applied".green().bold());
        }
    }

    Ok(())
}
