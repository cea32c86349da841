//! Tag persistence

use crate::errors::{from_rusqlite, Result};
use junction_core::model::Tag;
use rusqlite::{Connection, OptionalExtension};

/// Insert a tag
///
/// The tag text is the primary key, so inserting the same text twice
/// surfaces as a unique violation.
pub fn insert_tag(conn: &Connection, tag: &Tag) -> Result<()> {
    conn.execute(
        "INSERT INTO Tags (TagId) VALUES (?1)",
        [tag.tag_id.as_str()],
    )
    .map_err(from_rusqlite)?;

    Ok(())
}

/// Get a tag by its text
pub fn get_tag(conn: &Connection, tag_id: &str) -> Result<Option<Tag>> {
    conn.query_row(
        "SELECT TagId FROM Tags WHERE TagId = ?1",
        [tag_id],
        |row| {
            Ok(Tag {
                tag_id: row.get(0)?,
            })
        },
    )
    .optional()
    .map_err(from_rusqlite)
}

/// List all tags ordered by text
pub fn list_tags(conn: &Connection) -> Result<Vec<Tag>> {
    let mut stmt = conn
        .prepare("SELECT TagId FROM Tags ORDER BY TagId")
        .map_err(from_rusqlite)?;

    let tags = stmt
        .query_map([], |row| {
            Ok(Tag {
                tag_id: row.get(0)?,
            })
        })
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(from_rusqlite)?;

    Ok(tags)
}

/// Delete a tag; returns whether a row was removed
///
/// Junction rows referencing the tag go with it via cascade.
pub fn delete_tag(conn: &Connection, tag_id: &str) -> Result<bool> {
    let affected = conn
        .execute("DELETE FROM Tags WHERE TagId = ?1", [tag_id])
        .map_err(from_rusqlite)?;

    Ok(affected > 0)
}
