//! Eager-loading lookup commands
//!
//! Usage: junction lookup <tag TEXT | currency UID> [--json] [--db PATH]
//!
//! A root that exists without links prints an empty relation list; a
//! root that does not exist prints "not found". Neither case is an
//! error.

use clap::{Args, Subcommand};
use junction_store::repo::hydration;
use std::path::PathBuf;
use uuid::Uuid;

use crate::commands::{open_store, resolve_db_path};

#[derive(Debug, Args)]
pub struct LookupArgs {
    #[command(subcommand)]
    pub command: LookupCommand,
}

#[derive(Debug, Subcommand)]
pub enum LookupCommand {
    /// Load a tag and every post carrying it
    Tag(TagArgs),
    /// Load a currency and every region it circulates in
    Currency(CurrencyArgs),
}

#[derive(Debug, Args)]
pub struct TagArgs {
    /// The tag text
    pub tag_id: String,

    /// Print the result as JSON (null when the tag does not exist)
    #[arg(long)]
    pub json: bool,

    /// Path to the SQLite database (falls back to JUNCTION_DB, then .junction/store.db)
    #[arg(long)]
    pub db: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct CurrencyArgs {
    /// The currency UID
    pub uid: Uuid,

    /// Print the result as JSON (null when the currency does not exist)
    #[arg(long)]
    pub json: bool,

    /// Path to the SQLite database (falls back to JUNCTION_DB, then .junction/store.db)
    #[arg(long)]
    pub db: Option<PathBuf>,
}

/// Execute lookup command
pub fn execute(args: LookupArgs) -> Result<(), Box<dyn std::error::Error>> {
    match args.command {
        LookupCommand::Tag(tag_args) => execute_tag(tag_args),
        LookupCommand::Currency(currency_args) => execute_currency(currency_args),
    }
}

fn execute_tag(args: TagArgs) -> Result<(), Box<dyn std::error::Error>> {
    let conn = open_store(&resolve_db_path(args.db))?;
    let loaded = hydration::load_tag_with_posts(&conn, &args.tag_id)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&loaded)?);
        return Ok(());
    }

    match loaded {
        Some(loaded) => {
            println!("Tag {}", loaded.tag.tag_id);
            if loaded.posts.is_empty() {
                println!("  no posts carry this tag");
            } else {
                for post in &loaded.posts {
                    println!("  post {}: {}", post.post_id, post.title);
                }
            }
        }
        None => println!("Tag {} not found", args.tag_id),
    }

    Ok(())
}

fn execute_currency(args: CurrencyArgs) -> Result<(), Box<dyn std::error::Error>> {
    let conn = open_store(&resolve_db_path(args.db))?;
    let loaded = hydration::load_currency_with_regions(&conn, args.uid)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&loaded)?);
        return Ok(());
    }

    match loaded {
        Some(loaded) => {
            let code = loaded.currency.iso_code.as_deref().unwrap_or("-");
            let symbol = loaded.currency.symbol.as_deref().unwrap_or("-");
            println!("Currency {} ({}) symbol {}", code, loaded.currency.uid, symbol);
            if loaded.regions.is_empty() {
                println!("  circulates in no regions");
            } else {
                for region in &loaded.regions {
                    let country = region.country_iso_code.as_deref().unwrap_or("-");
                    println!("  region {} ({})", country, region.uid);
                }
            }
        }
        None => println!("Currency {} not found", args.uid),
    }

    Ok(())
}
