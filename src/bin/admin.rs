//! CLI administration tool for shorturl.
//!
//! Inspects stored url mappings and performs database checks without going
//! through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # List mappings, 20 per page
//! cargo run --bin admin -- list --page 2
//!
//! # Show where a short url points
//! cargo run --bin admin -- show 42
//!
//! # Find the short url of an original URL
//! cargo run --bin admin -- find https://www.freecodecamp.org
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection and apply migrations
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server: `DATABASE_URL` or the `DB_*` components, falling back
//! to the local SQLite file.

use shorturl::config;
use shorturl::domain::repositories::UrlMappingRepository;
use shorturl::infrastructure::persistence;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;

/// CLI tool for managing shorturl.
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
    /// List url mappings ordered by short url
    List {
        /// Page number, starting at 1
        #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(i64).range(1..))]
        page: i64,

        /// Mappings per page
        #[arg(long, default_value_t = 20, value_parser = clap::value_parser!(i64).range(1..=1000))]
        page_size: i64,
    },

    /// Show the original URL behind a short url
    Show {
        /// Numeric short url
        short_url: i64,
    },

    /// Find the short url assigned to an original URL
    Find {
        /// Original URL, matched exactly
        url: String,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection and apply pending migrations
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;

    if let Commands::Db {
        action: DbAction::Check,
    } = cli.command
    {
        println!("{}", "🔍 Checking database connection...".bright_blue());
    }

    let repo = persistence::connect(&config).await?;

    match cli.command {
        Commands::List { page, page_size } => list_mappings(repo.as_ref(), page, page_size).await?,
        Commands::Show { short_url } => show_mapping(repo.as_ref(), short_url).await?,
        Commands::Find { url } => find_mapping(repo.as_ref(), &url).await?,
        Commands::Stats => handle_stats(repo.as_ref()).await?,
        Commands::Db { action } => handle_db_action(action, repo.as_ref()).await?,
    }

    Ok(())
}

/// Lists one page of mappings.
///
/// # Output Format
///
/// ```text
/// 📋 URL Mappings (page 1/3)
///
///   Short  Original URL
///   ──────────────────────────────────────────────────────
///   1      https://www.freecodecamp.org
///   2      https://example.com/a
/// ```
async fn list_mappings(repo: &dyn UrlMappingRepository, page: i64, page_size: i64) -> Result<()> {
    let total = repo.count().await?;
    let total_pages = ((total + page_size - 1) / page_size).max(1);

    println!(
        "{}",
        format!("📋 URL Mappings (page {}/{})", page, total_pages)
            .bright_blue()
            .bold()
    );
    println!();

    let mappings = repo.list(page, page_size).await?;

    if mappings.is_empty() {
        println!("{}", "  No mappings found".yellow());
        println!();
        return Ok(());
    }

    println!(
        "  {:<6} {}",
        "Short".bright_white().bold(),
        "Original URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for mapping in &mappings {
        println!(
            "  {:<6} {}",
            mapping.short_url.to_string().bright_black(),
            mapping.original_url.cyan()
        );
    }

    println!();
    println!("  Total: {}", total.to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Resolves one short url.
async fn show_mapping(repo: &dyn UrlMappingRepository, short_url: i64) -> Result<()> {
    match repo.find_by_short_url(short_url).await? {
        Some(mapping) => {
            println!("  Short:    {}", mapping.short_url.to_string().bright_white());
            println!("  Original: {}", mapping.original_url.cyan());
        }
        None => println!(
            "{}",
            format!("❌ Short url {} does not exist", short_url).red()
        ),
    }

    Ok(())
}

/// Looks up the short url of an original URL.
async fn find_mapping(repo: &dyn UrlMappingRepository, url: &str) -> Result<()> {
    match repo.find_by_original_url(url).await? {
        Some(mapping) => {
            println!("  Original: {}", mapping.original_url.cyan());
            println!(
                "  Short:    {}",
                mapping.short_url.to_string().bright_green().bold()
            );
        }
        None => println!("{}", "⚠️  URL has not been shortened".yellow()),
    }

    Ok(())
}

/// Displays mapping count and the highest assigned short url.
async fn handle_stats(repo: &dyn UrlMappingRepository) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let count = repo.count().await?;
    let max = repo.find_max_short_url().await?;

    println!(
        "  Mappings:          {}",
        count.to_string().bright_green().bold()
    );
    println!(
        "  Highest short url: {}",
        max.map_or_else(|| "-".to_string(), |v| v.to_string())
            .bright_green()
            .bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
///
/// Connecting already applied migrations; a count query confirms the table
/// is readable.
async fn handle_db_action(action: DbAction, repo: &dyn UrlMappingRepository) -> Result<()> {
    match action {
        DbAction::Check => {
            repo.count().await?;
            println!("{}", "✅ Database connection OK".green().bold());
        }
    }

    Ok(())
}
