//! CLI administration tool for the shortcut service.
//!
//! Inspects and manages shortcuts and their edit keys directly against
//! storage, without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Newest shortcuts first
//! cargo run --bin admin -- shortcut list --limit 20
//!
//! # Show one shortcut
//! cargo run --bin admin -- shortcut show docs
//!
//! # Delete a shortcut (and its edit key)
//! cargo run --bin admin -- shortcut delete docs
//!
//! # Print the edit key, issuing one if missing
//! cargo run --bin admin -- token issue docs
//!
//! # Invalidate the edit key; the next issue creates a new one
//! cargo run --bin admin -- token revoke docs
//!
//! # Check storage connectivity
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server, see `shortcuts::config`. The `memory` backend starts
//! empty on every run, so this tool is only useful with `postgres`.

use shortcuts::config::{self, StorageBackend};
use shortcuts::server::build_service;
use shortcuts::state::DynShortcutService;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;

/// CLI tool for managing shortcuts.
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
    /// Inspect and delete shortcuts
    Shortcut {
        #[command(subcommand)]
        action: ShortcutAction,
    },

    /// Manage edit keys
    Token {
        #[command(subcommand)]
        action: TokenAction,
    },

    /// Storage operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Shortcut subcommands.
#[derive(Subcommand)]
enum ShortcutAction {
    /// List shortcuts, newest first
    List {
        /// Maximum number of rows
        #[arg(short, long, default_value_t = 20)]
        limit: i64,

        /// Rows to skip
        #[arg(short, long, default_value_t = 0)]
        offset: i64,
    },

    /// Show a single shortcut
    Show { name: String },

    /// Delete a shortcut
    Delete {
        name: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Edit key subcommands.
#[derive(Subcommand)]
enum TokenAction {
    /// Print a shortcut's edit key, issuing one if it has none
    Issue { name: String },

    /// Invalidate a shortcut's edit key
    Revoke {
        name: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Storage subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check storage connectivity
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env().context("Invalid configuration")?;
    if config.storage_backend == StorageBackend::Memory {
        println!(
            "{}",
            "⚠️  STORAGE_BACKEND=memory: starting from an empty store".yellow()
        );
    }

    let service = build_service(&config)
        .await
        .context("Failed to initialize storage")?;

    match cli.command {
        Commands::Shortcut { action } => handle_shortcut_action(action, &service).await?,
        Commands::Token { action } => handle_token_action(action, &service).await?,
        Commands::Db { action } => handle_db_action(action, &service).await?,
    }

    Ok(())
}

/// Dispatches shortcut commands.
async fn handle_shortcut_action(action: ShortcutAction, service: &DynShortcutService) -> Result<()> {
    match action {
        ShortcutAction::List { limit, offset } => list_shortcuts(service, limit, offset).await,
        ShortcutAction::Show { name } => show_shortcut(service, &name).await,
        ShortcutAction::Delete { name, yes } => delete_shortcut(service, &name, yes).await,
    }
}

/// Lists shortcuts newest first.
///
/// # Output Format
///
/// ```text
/// 📋 Shortcuts
///
///   Name                 Created              Destination
///   ──────────────────────────────────────────────────────────────────────────
///   docs                 2024-05-01 10:30     https://example.com/docs
/// ```
async fn list_shortcuts(service: &DynShortcutService, limit: i64, offset: i64) -> Result<()> {
    println!("{}", "📋 Shortcuts".bright_blue().bold());
    println!();

    let shortcuts = service
        .list_new(limit, offset)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list shortcuts: {}", e))?;
    let total = service
        .count()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count shortcuts: {}", e))?;

    if shortcuts.is_empty() {
        println!("{}", "  No shortcuts found".yellow());
        return Ok(());
    }

    println!(
        "  {:<20} {:<20} {}",
        "Name".bright_white().bold(),
        "Created".bright_white().bold(),
        "Destination".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for shortcut in &shortcuts {
        println!(
            "  {:<20} {:<20} {}",
            shortcut.name().cyan(),
            shortcut
                .created_at()
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            shortcut.destination()
        );
    }

    println!();
    println!(
        "  Showing {} of {}",
        shortcuts.len().to_string().bright_white().bold(),
        total.to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

async fn show_shortcut(service: &DynShortcutService, name: &str) -> Result<()> {
    let shortcut = service
        .get(name)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    println!("{}", "🔗 Shortcut".bright_blue().bold());
    println!();
    println!("  Name:        {}", shortcut.name().cyan());
    println!("  Destination: {}", shortcut.destination());
    println!(
        "  Created:     {}",
        shortcut
            .created_at()
            .format("%Y-%m-%d %H:%M:%S UTC")
            .to_string()
            .bright_black()
    );
    println!();

    Ok(())
}

/// Deletes a shortcut after confirmation (default: No).
///
/// Bypasses the edit key: this tool is trusted.
async fn delete_shortcut(service: &DynShortcutService, name: &str, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑️  Delete Shortcut".bright_blue().bold());
    println!();

    let shortcut = service
        .get(name)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    println!("  Name:        {}", shortcut.name().cyan());
    println!("  Destination: {}", shortcut.destination());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this shortcut?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    service
        .delete(name)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete shortcut: {}", e))?;

    println!("{}", "✅ Shortcut deleted".green().bold());
    println!();

    Ok(())
}

/// Dispatches edit key commands.
async fn handle_token_action(action: TokenAction, service: &DynShortcutService) -> Result<()> {
    match action {
        TokenAction::Issue { name } => issue_token(service, &name).await,
        TokenAction::Revoke { name, yes } => revoke_token(service, &name, yes).await,
    }
}

/// Prints the edit key of a shortcut, issuing one if it has none.
async fn issue_token(service: &DynShortcutService, name: &str) -> Result<()> {
    println!("{}", "🔑 Edit Key".bright_blue().bold());
    println!();

    let shortcut = service
        .get(name)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;
    let token = service
        .get_token(&shortcut)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to issue edit key: {}", e))?;

    println!("  Shortcut: {}", token.shortcut_name().cyan());
    println!("  Key:      {}", token.value().bright_yellow().bold());
    println!();
    println!("{}", "Example:".bright_white());
    println!(
        "  curl -X DELETE -H \"Authorization: Bearer {}\" http://localhost:3000/api/shortcuts/{}",
        token.value().bright_yellow(),
        token.shortcut_name()
    );
    println!();

    Ok(())
}

/// Invalidates an edit key after confirmation (default: No).
async fn revoke_token(service: &DynShortcutService, name: &str, skip_confirm: bool) -> Result<()> {
    println!("{}", "🔒 Revoke Edit Key".bright_blue().bold());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt(format!("Revoke the edit key of '{}'?", name))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    service
        .revoke_token(name)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to revoke edit key: {}", e))?;

    println!("{}", "✅ Edit key revoked".green().bold());
    println!(
        "  Issue a new one with: {} admin -- token issue {}",
        "cargo run --bin".bright_cyan(),
        name
    );
    println!();

    Ok(())
}

/// Handles storage diagnostic commands.
async fn handle_db_action(action: DbAction, service: &DynShortcutService) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking storage...".bright_blue());

            let count = service
                .count()
                .await
                .map_err(|e| anyhow::anyhow!("Storage check failed: {}", e))?;

            println!("{}", "✅ Storage connection OK".green().bold());
            println!("  Shortcuts: {}", count.to_string().bright_green().bold());
        }
    }

    Ok(())
}
