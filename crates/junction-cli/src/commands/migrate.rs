//! Migration commands
//!
//! Usage: junction migrate <apply|revert|status> [--db PATH]

use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::commands::{open_store, resolve_db_path};

#[derive(Debug, Args)]
pub struct MigrateArgs {
    #[command(subcommand)]
    pub command: MigrateCommand,
}

#[derive(Debug, Subcommand)]
pub enum MigrateCommand {
    /// Apply all pending migrations
    Apply(TargetArgs),
    /// Revert the most recently applied migration
    Revert(TargetArgs),
    /// Show applied and pending migrations
    Status(TargetArgs),
}

#[derive(Debug, Args)]
pub struct TargetArgs {
    /// Path to the SQLite database (falls back to JUNCTION_DB, then .junction/store.db)
    #[arg(long)]
    pub db: Option<PathBuf>,
}

/// Execute migrate command
pub fn execute(args: MigrateArgs) -> Result<(), Box<dyn std::error::Error>> {
    match args.command {
        MigrateCommand::Apply(target) => execute_apply(target),
        MigrateCommand::Revert(target) => execute_revert(target),
        MigrateCommand::Status(target) => execute_status(target),
    }
}

fn execute_apply(args: TargetArgs) -> Result<(), Box<dyn std::error::Error>> {
    let db_path = resolve_db_path(args.db);
    let mut conn = open_store(&db_path)?;

    junction_store::migrations::apply_migrations(&mut conn)?;

    let applied = junction_store::migrations::applied_migrations(&conn)?;
    println!(
        "✓ Store at {} is on {} migrations",
        db_path.display(),
        applied.len()
    );

    Ok(())
}

fn execute_revert(args: TargetArgs) -> Result<(), Box<dyn std::error::Error>> {
    let db_path = resolve_db_path(args.db);
    let mut conn = open_store(&db_path)?;

    match junction_store::migrations::revert_last_migration(&mut conn)? {
        Some(id) => println!("✓ Reverted {}", id),
        None => println!("Nothing to revert"),
    }

    Ok(())
}

fn execute_status(args: TargetArgs) -> Result<(), Box<dyn std::error::Error>> {
    let db_path = resolve_db_path(args.db);
    let conn = open_store(&db_path)?;

    let applied = junction_store::migrations::applied_migrations(&conn)?;
    for migration in &applied {
        // Ledger checksums are 64 hex chars, but the ledger is plain
        // SQLite and anyone can edit it; never index past what is there.
        let prefix: String = migration.checksum.chars().take(12).collect();
        println!("applied  {} (checksum {})", migration.id, prefix);
    }

    for migration in junction_store::migrations::get_migrations() {
        if !applied.iter().any(|a| a.id == migration.id) {
            println!("pending  {}", migration.id);
        }
    }

    Ok(())
}
