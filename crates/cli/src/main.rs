mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use favspot_core::domain::NewItem;
use favspot_core::Favorites;

/// FavSpot — favorite photo catalog
#[derive(Parser)]
#[command(name = "favspot", version, about)]
struct Cli {
    /// Path to the favorites database
    #[arg(long, default_value_t = default_db_path())]
    db: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Favorite a photo
    Add {
        /// Thumbnail URL (the dedup key)
        thumb_url: String,
        /// Photo title
        #[arg(long, default_value = "")]
        title: String,
        /// Photo author
        #[arg(long, default_value = "")]
        author: String,
        /// Full-resolution photo URL
        #[arg(long, default_value = "")]
        photo_url: String,
        /// Latitude in degrees
        #[arg(long, default_value_t = 0.0)]
        lat: f64,
        /// Longitude in degrees
        #[arg(long, default_value_t = 0.0)]
        lon: f64,
        /// Thumbnail image file to compress and store on the record
        #[arg(long)]
        thumb: Option<PathBuf>,
    },
    /// List all favorites
    Ls {
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// List labels in use with their item counts
    Labels,
    /// Tag a favorite with a label
    Tag {
        /// Item id
        id: i64,
        /// Label name
        label: String,
    },
    /// Remove a favorite
    Rm {
        /// Item id
        id: i64,
    },
    /// Remove every favorite and label
    Purge {
        /// Confirm the purge
        #[arg(long)]
        yes: bool,
    },
    /// Verify label reference counts against live items
    Check,
}

fn default_db_path() -> String {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home)
        .join(".favspot")
        .join("favorites.db")
        .to_string_lossy()
        .to_string()
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let db_path = PathBuf::from(&cli.db);
    let favorites = Favorites::open(&db_path)?;

    match cli.command {
        Commands::Add {
            thumb_url,
            title,
            author,
            photo_url,
            lat,
            lon,
            thumb,
        } => {
            let item = NewItem {
                title,
                author,
                thumb_url,
                photo_url,
                latitude: lat,
                longitude: lon,
            };
            commands::add::run(&favorites, &item, thumb)?;
        }
        Commands::Ls { json } => commands::ls::run(&favorites, json)?,
        Commands::Labels => commands::labels::run(&favorites)?,
        Commands::Tag { id, label } => commands::tag::run(&favorites, id, &label)?,
        Commands::Rm { id } => commands::rm::run(&favorites, id)?,
        Commands::Purge { yes } => commands::purge::run(&favorites, yes)?,
        Commands::Check => commands::check::run(&favorites)?,
    }

    Ok(())
}
