//! Junction CLI
//!
//! Command-line interface for the junction store

use clap::{Parser, Subcommand};
use junction_core::logging::{self, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "junction")]
#[command(about = "Junction - many-to-many relations over SQLite", long_about = None)]
struct Cli {
    /// Emit logs as JSON lines instead of human-readable text
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Migration operations (apply, revert, status)
    Migrate(commands::migrate::MigrateArgs),
    /// Load the demonstration data set into the store
    Seed(commands::seed::SeedArgs),
    /// Eager-loading lookups (tag or currency with its relations)
    Lookup(commands::lookup::LookupArgs),
    /// Schema operations (verify, show)
    Schema(commands::schema::SchemaArgs),
}

fn main() {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    logging::init(if cli.log_json {
        Profile::Production
    } else {
        Profile::Development
    });

    let result = match cli.command {
        Commands::Migrate(args) => commands::migrate::execute(args),
        Commands::Seed(args) => commands::seed::execute(args),
        Commands::Lookup(args) => commands::lookup::execute(args),
        Commands::Schema(args) => commands::schema::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
