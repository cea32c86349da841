//! Schema commands
//!
//! Usage: junction schema verify [--db PATH]
//!        junction schema show

use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::commands::{open_store, resolve_db_path};

#[derive(Debug, Args)]
pub struct SchemaArgs {
    #[command(subcommand)]
    pub command: SchemaCommand,
}

#[derive(Debug, Subcommand)]
pub enum SchemaCommand {
    /// Check a live database against the expected descriptors
    Verify(VerifyArgs),
    /// Print the expected tables and indexes
    Show,
}

#[derive(Debug, Args)]
pub struct VerifyArgs {
    /// Path to the SQLite database (falls back to JUNCTION_DB, then .junction/store.db)
    #[arg(long)]
    pub db: Option<PathBuf>,
}

/// Execute schema command
pub fn execute(args: SchemaArgs) -> Result<(), Box<dyn std::error::Error>> {
    match args.command {
        SchemaCommand::Verify(verify_args) => execute_verify(verify_args),
        SchemaCommand::Show => execute_show(),
    }
}

fn execute_verify(args: VerifyArgs) -> Result<(), Box<dyn std::error::Error>> {
    let db_path = resolve_db_path(args.db);
    let conn = open_store(&db_path)?;

    junction_store::schema::verify(&conn)?;
    println!("✓ Schema at {} matches the expected layout", db_path.display());

    Ok(())
}

fn execute_show() -> Result<(), Box<dyn std::error::Error>> {
    for line in junction_store::schema::describe() {
        println!("{}", line);
    }

    Ok(())
}
