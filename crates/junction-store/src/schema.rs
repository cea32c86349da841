//! Expected schema descriptors
//!
//! A static description of the tables and indexes the full migration
//! set produces, plus verification of a live database against it. The
//! descriptors are the fixed point a store can be checked against
//! without replaying migration history.

use crate::errors::{from_rusqlite, JunctionError, Result};
use rusqlite::{Connection, OptionalExtension};

/// Expected shape of one table
#[derive(Debug, Clone, Copy)]
pub struct TableSpec {
    pub name: &'static str,
    pub columns: &'static [&'static str],
}

/// Expected shape of one named index
#[derive(Debug, Clone, Copy)]
pub struct IndexSpec {
    pub name: &'static str,
    pub table: &'static str,
    pub unique: bool,
}

/// Tables created by the full migration set, in creation order
///
/// "Currecies" is the real table name; see the 002 migration script.
pub const TABLES: &[TableSpec] = &[
    TableSpec {
        name: "Posts",
        columns: &["PostId", "Title", "Content"],
    },
    TableSpec {
        name: "Tags",
        columns: &["TagId"],
    },
    TableSpec {
        name: "PostTag",
        columns: &["PostId", "TagId"],
    },
    TableSpec {
        name: "Currecies",
        columns: &["UID", "ISOCode", "Symbol"],
    },
    TableSpec {
        name: "Regions",
        columns: &["UID", "CountryISOCode"],
    },
    TableSpec {
        name: "RegionCurrency",
        columns: &["CurrencyUID", "RegionUID"],
    },
];

/// Named indexes created by the full migration set
pub const INDEXES: &[IndexSpec] = &[
    IndexSpec {
        name: "IX_PostTag_PostId",
        table: "PostTag",
        unique: false,
    },
    IndexSpec {
        name: "IX_PostTag_TagId",
        table: "PostTag",
        unique: false,
    },
    IndexSpec {
        name: "UX_Currency_ISOCode",
        table: "Currecies",
        unique: true,
    },
    IndexSpec {
        name: "UX_Region_CountryISOCode",
        table: "Regions",
        unique: true,
    },
    IndexSpec {
        name: "IX_RegionCurrency_CurrencyUID",
        table: "RegionCurrency",
        unique: false,
    },
    IndexSpec {
        name: "IX_RegionCurrency_RegionUID",
        table: "RegionCurrency",
        unique: false,
    },
];

/// Verify a live database against the expected descriptors
///
/// Checks that every expected table exists with its expected columns and
/// that every named index exists with the right uniqueness. Extra tables
/// are tolerated; the ledger and SQLite's own bookkeeping tables always
/// coexist with the schema.
///
/// # Errors
///
/// Returns `SchemaMismatch` listing every divergence found, so one run
/// reports the whole gap rather than the first problem.
pub fn verify(conn: &Connection) -> Result<()> {
    let mut problems = Vec::new();

    for table in TABLES {
        if !table_exists(conn, table.name)? {
            problems.push(format!("missing table {}", table.name));
            continue;
        }

        let live = table_columns(conn, table.name)?;
        for column in table.columns {
            if !live.iter().any(|c| c == column) {
                problems.push(format!("table {} is missing column {}", table.name, column));
            }
        }
    }

    for index in INDEXES {
        match index_uniqueness(conn, index.table, index.name)? {
            None => problems.push(format!("missing index {}", index.name)),
            Some(unique) if unique != index.unique => {
                let expected = if index.unique { "unique" } else { "non-unique" };
                problems.push(format!("index {} should be {}", index.name, expected));
            }
            Some(_) => {}
        }
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(JunctionError::SchemaMismatch(problems.join("; ")))
    }
}

/// Render the expected schema as display lines
pub fn describe() -> Vec<String> {
    let mut lines = Vec::new();

    for table in TABLES {
        lines.push(format!("{} ({})", table.name, table.columns.join(", ")));
    }

    for index in INDEXES {
        let kind = if index.unique { "UNIQUE INDEX" } else { "INDEX" };
        lines.push(format!("{} {} ON {}", kind, index.name, index.table));
    }

    lines
}

fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let present = conn
        .query_row(
            "SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1",
            [name],
            |_| Ok(true),
        )
        .optional()
        .map_err(from_rusqlite)?;

    Ok(present.unwrap_or(false))
}

fn table_columns(conn: &Connection, table: &str) -> Result<Vec<String>> {
    // PRAGMA arguments cannot be bound; table names here come from the
    // static descriptors above, never from callers.
    let mut stmt = conn
        .prepare(&format!("PRAGMA table_info(\"{}\")", table))
        .map_err(from_rusqlite)?;

    let columns = stmt
        .query_map([], |row| row.get::<_, String>(1))
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(from_rusqlite)?;

    Ok(columns)
}

fn index_uniqueness(conn: &Connection, table: &str, index: &str) -> Result<Option<bool>> {
    let mut stmt = conn
        .prepare(&format!("PRAGMA index_list(\"{}\")", table))
        .map_err(from_rusqlite)?;

    let indexes = stmt
        .query_map([], |row| {
            let name: String = row.get(1)?;
            let unique: i64 = row.get(2)?;
            Ok((name, unique != 0))
        })
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(from_rusqlite)?;

    Ok(indexes
        .into_iter()
        .find(|(name, _)| name == index)
        .map(|(_, unique)| unique))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::migrations;

    fn setup_test_db() -> Connection {
        let mut conn = Connection::open_in_memory().unwrap();
        migrations::apply_migrations(&mut conn).unwrap();
        conn
    }

    #[test]
    fn test_verify_passes_on_migrated_db() {
        let conn = setup_test_db();
        assert!(verify(&conn).is_ok());
    }

    #[test]
    fn test_verify_fails_on_empty_db() {
        let conn = Connection::open_in_memory().unwrap();
        let err = verify(&conn).unwrap_err();
        match err {
            JunctionError::SchemaMismatch(detail) => {
                assert!(detail.contains("missing table Posts"));
                assert!(detail.contains("missing table Currecies"));
            }
            other => panic!("Expected schema mismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_verify_reports_dropped_index() {
        let conn = setup_test_db();
        conn.execute("DROP INDEX UX_Currency_ISOCode", []).unwrap();

        let err = verify(&conn).unwrap_err();
        match err {
            JunctionError::SchemaMismatch(detail) => {
                assert!(detail.contains("missing index UX_Currency_ISOCode"));
            }
            other => panic!("Expected schema mismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_describe_covers_all_tables() {
        let lines = describe();
        for table in TABLES {
            assert!(lines.iter().any(|line| line.contains(table.name)));
        }
    }
}
