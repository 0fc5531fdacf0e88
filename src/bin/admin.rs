//! CLI administration tool for fyyur.
//!
//! Provides directory statistics, database checks and cascading deletes
//! without going through the web pages.
//!
//! # Usage
//!
//! ```bash
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Delete an artist and their shows
//! cargo run --bin admin -- artist delete 4
//!
//! # Delete a venue without the confirmation prompt
//! cargo run --bin admin -- venue delete 1 -y
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL`, or `DB_HOST`/`DB_PORT`/`DB_USER`/`DB_PASSWORD`/`DB_NAME`

use fyyur::config::Config;
use fyyur::domain::repositories::{ArtistRepository, ShowRepository, VenueRepository};
use fyyur::domain::scheduling::{Clock, SystemClock};
use fyyur::infrastructure::persistence::{
    PgArtistRepository, PgShowRepository, PgVenueRepository,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing fyyur.
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
    /// Show directory statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },

    /// Manage artists
    Artist {
        #[command(subcommand)]
        action: DeleteAction,
    },

    /// Manage venues
    Venue {
        #[command(subcommand)]
        action: DeleteAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

/// Record removal subcommands.
#[derive(Subcommand)]
enum DeleteAction {
    /// Delete a record together with its shows
    Delete {
        /// Record id
        id: i64,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = Config::from_env()?;
    let pool = PgPool::connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    let pool = Arc::new(pool);

    match cli.command {
        Commands::Stats => handle_stats(pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
        Commands::Artist {
            action: DeleteAction::Delete { id, yes },
        } => delete_artist(pool, id, yes).await?,
        Commands::Venue {
            action: DeleteAction::Delete { id, yes },
        } => delete_venue(pool, id, yes).await?,
    }

    Ok(())
}

/// Displays directory statistics.
///
/// Shows:
/// - Number of venues and artists
/// - Number of shows, and how many are upcoming
async fn handle_stats(pool: Arc<PgPool>) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let venues = PgVenueRepository::new(pool.clone());
    let artists = PgArtistRepository::new(pool.clone());
    let shows = PgShowRepository::new(pool);

    let venue_count = venues.count().await?;
    let artist_count = artists.count().await?;
    let show_count = shows.count(None).await?;
    let upcoming_count = shows.count(Some(SystemClock.now())).await?;

    println!(
        "  Venues:         {}",
        venue_count.to_string().bright_green().bold()
    );
    println!(
        "  Artists:        {}",
        artist_count.to_string().bright_green().bold()
    );
    println!(
        "  Shows:          {}",
        show_count.to_string().bright_green().bold()
    );
    println!(
        "  Upcoming shows: {}",
        upcoming_count.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Deletes an artist after confirmation. Their shows are removed by cascade.
async fn delete_artist(pool: Arc<PgPool>, id: i64, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑️  Delete artist".bright_blue().bold());
    println!();

    let repo = PgArtistRepository::new(pool.clone());
    let shows = PgShowRepository::new(pool);

    let artist = repo.find_by_id(id).await?.context("Artist not found")?;
    let booked = shows.list_by_artist(id).await?.len();

    println!("  Artist: {}", artist.name.cyan());
    println!("  ID:     {}", artist.id.to_string().bright_black());
    println!("  Shows:  {}", booked.to_string().yellow());
    println!();

    if !confirm("Delete this artist and all their shows?", skip_confirm)? {
        println!("{}", "❌ Cancelled".red());
        return Ok(());
    }

    if !repo.delete(id).await? {
        anyhow::bail!("Artist {} was already deleted", id);
    }

    println!("{}", "✅ Artist deleted".green().bold());
    println!();

    Ok(())
}

/// Deletes a venue after confirmation. Its shows are removed by cascade.
async fn delete_venue(pool: Arc<PgPool>, id: i64, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑️  Delete venue".bright_blue().bold());
    println!();

    let repo = PgVenueRepository::new(pool);
    let venue = repo.find_by_id(id).await?.context("Venue not found")?;

    println!("  Venue: {}", venue.name.cyan());
    println!("  ID:    {}", venue.id.to_string().bright_black());
    println!(
        "  Area:  {}",
        format!("{}, {}", venue.city, venue.state).bright_black()
    );
    println!();

    if !confirm("Delete this venue and all its shows?", skip_confirm)? {
        println!("{}", "❌ Cancelled".red());
        return Ok(());
    }

    if !repo.delete(id).await? {
        anyhow::bail!("Venue {} was already deleted", id);
    }

    println!("{}", "✅ Venue deleted".green().bold());
    println!();

    Ok(())
}

fn confirm(prompt: &str, skip: bool) -> Result<bool> {
    if skip {
        return Ok(true);
    }

    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()?)
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}
