//! Currency persistence and the RegionCurrency junction
//!
//! The backing table is named "Currecies"; see the 002 migration script
//! for why the misspelling is kept.

use crate::errors::{from_rusqlite, Result};
use crate::repo::uuid_column;
use junction_core::model::{Currency, RegionCurrency};
use rusqlite::{Connection, OptionalExtension, Row};
use uuid::Uuid;

fn row_to_currency(row: &Row<'_>) -> rusqlite::Result<Currency> {
    let uid_text: String = row.get(0)?;

    Ok(Currency {
        uid: uuid_column(0, uid_text)?,
        iso_code: row.get(1)?,
        symbol: row.get(2)?,
    })
}

/// Insert a currency under its caller-supplied UID
pub fn insert_currency(conn: &Connection, currency: &Currency) -> Result<()> {
    conn.execute(
        "INSERT INTO Currecies (UID, ISOCode, Symbol) VALUES (?1, ?2, ?3)",
        rusqlite::params![
            currency.uid.to_string(),
            currency.iso_code,
            currency.symbol
        ],
    )
    .map_err(from_rusqlite)?;

    Ok(())
}

/// Get a currency by UID
pub fn get_currency(conn: &Connection, uid: Uuid) -> Result<Option<Currency>> {
    conn.query_row(
        "SELECT UID, ISOCode, Symbol FROM Currecies WHERE UID = ?1",
        [uid.to_string()],
        row_to_currency,
    )
    .optional()
    .map_err(from_rusqlite)
}

/// Find the currency carrying the given ISO code
///
/// At most one row can match thanks to the unique index on ISOCode.
pub fn find_by_iso_code(conn: &Connection, iso_code: &str) -> Result<Option<Currency>> {
    conn.query_row(
        "SELECT UID, ISOCode, Symbol FROM Currecies WHERE ISOCode = ?1",
        [iso_code],
        row_to_currency,
    )
    .optional()
    .map_err(from_rusqlite)
}

/// Delete a currency; returns whether a row was removed
///
/// Junction rows referencing the currency go with it via cascade.
pub fn delete_currency(conn: &Connection, uid: Uuid) -> Result<bool> {
    let affected = conn
        .execute("DELETE FROM Currecies WHERE UID = ?1", [uid.to_string()])
        .map_err(from_rusqlite)?;

    Ok(affected > 0)
}

/// Link a region to a currency
///
/// Both sides must already exist: a missing currency or region surfaces
/// as a foreign key violation, a repeated pair as a unique violation.
pub fn link_region(conn: &Connection, edge: &RegionCurrency) -> Result<()> {
    conn.execute(
        "INSERT INTO RegionCurrency (CurrencyUID, RegionUID) VALUES (?1, ?2)",
        rusqlite::params![edge.currency_uid.to_string(), edge.region_uid.to_string()],
    )
    .map_err(from_rusqlite)?;

    Ok(())
}

/// Unlink a region from a currency; returns whether the edge existed
pub fn unlink_region(conn: &Connection, edge: &RegionCurrency) -> Result<bool> {
    let affected = conn
        .execute(
            "DELETE FROM RegionCurrency WHERE CurrencyUID = ?1 AND RegionUID = ?2",
            rusqlite::params![edge.currency_uid.to_string(), edge.region_uid.to_string()],
        )
        .map_err(from_rusqlite)?;

    Ok(affected > 0)
}
