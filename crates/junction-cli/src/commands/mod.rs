//! CLI command implementations

pub mod lookup;
pub mod migrate;
pub mod schema;
pub mod seed;

use std::path::{Path, PathBuf};

/// Pick the database path: the --db flag wins, then the JUNCTION_DB
/// environment variable, then the default location.
pub(crate) fn resolve_db_path(flag: Option<PathBuf>) -> PathBuf {
    flag.or_else(|| std::env::var_os("JUNCTION_DB").map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(".junction/store.db"))
}

/// Open and configure the store, creating the parent directory for
/// file-backed databases on first use.
pub(crate) fn open_store(
    db_path: &Path,
) -> Result<rusqlite::Connection, Box<dyn std::error::Error>> {
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let conn = junction_store::db::open(db_path)?;
    junction_store::db::configure(&conn)?;

    Ok(conn)
}
