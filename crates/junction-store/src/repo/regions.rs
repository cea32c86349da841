//! Region persistence

use crate::errors::{from_rusqlite, Result};
use crate::repo::uuid_column;
use junction_core::model::Region;
use rusqlite::{Connection, OptionalExtension, Row};
use uuid::Uuid;

fn row_to_region(row: &Row<'_>) -> rusqlite::Result<Region> {
    let uid_text: String = row.get(0)?;

    Ok(Region {
        uid: uuid_column(0, uid_text)?,
        country_iso_code: row.get(1)?,
    })
}

/// Insert a region under its caller-supplied UID
///
/// Country codes longer than eight characters are rejected by the CHECK
/// constraint on the table.
pub fn insert_region(conn: &Connection, region: &Region) -> Result<()> {
    conn.execute(
        "INSERT INTO Regions (UID, CountryISOCode) VALUES (?1, ?2)",
        rusqlite::params![region.uid.to_string(), region.country_iso_code],
    )
    .map_err(from_rusqlite)?;

    Ok(())
}

/// Get a region by UID
pub fn get_region(conn: &Connection, uid: Uuid) -> Result<Option<Region>> {
    conn.query_row(
        "SELECT UID, CountryISOCode FROM Regions WHERE UID = ?1",
        [uid.to_string()],
        row_to_region,
    )
    .optional()
    .map_err(from_rusqlite)
}

/// Find the region carrying the given country code
///
/// At most one row can match thanks to the unique index on
/// CountryISOCode.
pub fn find_by_country_code(conn: &Connection, country_iso_code: &str) -> Result<Option<Region>> {
    conn.query_row(
        "SELECT UID, CountryISOCode FROM Regions WHERE CountryISOCode = ?1",
        [country_iso_code],
        row_to_region,
    )
    .optional()
    .map_err(from_rusqlite)
}

/// Delete a region; returns whether a row was removed
///
/// Junction rows referencing the region go with it via cascade.
pub fn delete_region(conn: &Connection, uid: Uuid) -> Result<bool> {
    let affected = conn
        .execute("DELETE FROM Regions WHERE UID = ?1", [uid.to_string()])
        .map_err(from_rusqlite)?;

    Ok(affected > 0)
}
