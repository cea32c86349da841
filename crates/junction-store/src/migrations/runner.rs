//! Migration runner
//!
//! Applies embedded migrations in order, records each one in the
//! schema_version ledger, and can revert the most recent record

use crate::errors::{checksum_mismatch, from_rusqlite, migration_error, Result};
use crate::migrations::checksums::compute_checksum;
use crate::migrations::embedded::{get_migrations, Migration};
use rusqlite::{Connection, OptionalExtension};

/// One row of the schema_version ledger
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedMigration {
    pub id: String,
    pub applied_at: i64,
    pub checksum: String,
}

/// Apply all pending migrations to the database
///
/// Already-applied migrations are skipped after their recorded checksum
/// is verified against the embedded script. A ledger row whose id is
/// unknown to the embedded list means the binary and the database have
/// diverged, which is an error. Each pending migration runs in its own
/// transaction together with its ledger insert, so a failing step
/// leaves the database at the previous migration boundary.
pub fn apply_migrations(conn: &mut Connection) -> Result<()> {
    create_schema_version_table(conn)?;

    let embedded = get_migrations();

    for applied in applied_migrations(conn)? {
        if !embedded.iter().any(|m| m.id == applied.id) {
            return Err(migration_error(
                &applied.id,
                "recorded in the ledger but not embedded",
            ));
        }
    }

    for migration in embedded {
        apply_migration(conn, &migration)?;
    }

    Ok(())
}

/// Revert the most recently applied migration
///
/// Runs the migration's down script and removes its ledger row in one
/// transaction. Returns the reverted id, or `None` when nothing has
/// been applied.
pub fn revert_last_migration(conn: &mut Connection) -> Result<Option<String>> {
    if !ledger_exists(conn)? {
        return Ok(None);
    }

    let last: Option<String> = conn
        .query_row(
            "SELECT migration_id FROM schema_version ORDER BY id DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()
        .map_err(from_rusqlite)?;

    let migration_id = match last {
        Some(id) => id,
        None => return Ok(None),
    };

    let migration = get_migrations()
        .into_iter()
        .find(|m| m.id == migration_id)
        .ok_or_else(|| migration_error(&migration_id, "recorded in the ledger but not embedded"))?;

    let tx = conn.transaction().map_err(from_rusqlite)?;

    tx.execute_batch(migration.down_sql)
        .map_err(|e| migration_error(migration.id, &e.to_string()))?;

    tx.execute(
        "DELETE FROM schema_version WHERE migration_id = ?1",
        [migration.id],
    )
    .map_err(from_rusqlite)?;

    tx.commit().map_err(from_rusqlite)?;

    tracing::info!(migration_id = %migration.id, "Reverted migration");

    Ok(Some(migration_id))
}

/// List the ledger in application order
///
/// Returns an empty list when the ledger table does not exist yet.
pub fn applied_migrations(conn: &Connection) -> Result<Vec<AppliedMigration>> {
    if !ledger_exists(conn)? {
        return Ok(Vec::new());
    }

    let mut stmt = conn
        .prepare("SELECT migration_id, applied_at, checksum FROM schema_version ORDER BY id")
        .map_err(from_rusqlite)?;

    let applied = stmt
        .query_map([], |row| {
            Ok(AppliedMigration {
                id: row.get(0)?,
                applied_at: row.get(1)?,
                checksum: row.get(2)?,
            })
        })
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(from_rusqlite)?;

    Ok(applied)
}

/// Create the schema_version table if it doesn't exist
fn create_schema_version_table(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS schema_version (
            id INTEGER PRIMARY KEY,
            migration_id TEXT NOT NULL UNIQUE,
            applied_at INTEGER NOT NULL,
            checksum TEXT NOT NULL
        )",
        [],
    )
    .map_err(from_rusqlite)?;

    Ok(())
}

fn ledger_exists(conn: &Connection) -> Result<bool> {
    let present = conn
        .query_row(
            "SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'schema_version'",
            [],
            |_| Ok(true),
        )
        .optional()
        .map_err(from_rusqlite)?;

    Ok(present.unwrap_or(false))
}

/// Apply a single migration if not already applied
fn apply_migration(conn: &mut Connection, migration: &Migration) -> Result<()> {
    let recorded: Option<String> = conn
        .query_row(
            "SELECT checksum FROM schema_version WHERE migration_id = ?1",
            [migration.id],
            |row| row.get(0),
        )
        .optional()
        .map_err(from_rusqlite)?;

    let checksum = compute_checksum(migration.up_sql);

    if let Some(recorded) = recorded {
        // Idempotent re-run, but refuse to continue over a script that
        // was edited after it was applied.
        if recorded != checksum {
            return Err(checksum_mismatch(migration.id, &recorded, &checksum));
        }
        return Ok(());
    }

    let tx = conn.transaction().map_err(from_rusqlite)?;

    tx.execute_batch(migration.up_sql)
        .map_err(|e| migration_error(migration.id, &e.to_string()))?;

    let now = chrono::Utc::now().timestamp();
    tx.execute(
        "INSERT INTO schema_version (migration_id, applied_at, checksum) VALUES (?1, ?2, ?3)",
        rusqlite::params![migration.id, now, checksum],
    )
    .map_err(from_rusqlite)?;

    tx.commit().map_err(from_rusqlite)?;

    tracing::info!(migration_id = %migration.id, "Applied migration");

    Ok(())
}
