//! Migration framework
//!
//! Provides:
//! - Embedded SQL migrations with paired up/down scripts
//! - Idempotent, checksummed application in per-migration transactions
//! - Reversal of the most recently applied migration

mod checksums;
mod embedded;
mod runner;

pub use embedded::{get_migrations, Migration};
pub use runner::{applied_migrations, apply_migrations, revert_last_migration, AppliedMigration};
