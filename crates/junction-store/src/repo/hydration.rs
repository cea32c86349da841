//! Eager-loading lookups
//!
//! Loads a root row together with its related rows across the junction
//! in one call, with deterministic ordering of the related collection.
//! A root with no links hydrates to an empty collection; a missing root
//! hydrates to `None`.

use crate::errors::{from_rusqlite, Result};
use crate::repo::{currencies, tags, uuid_column};
use junction_core::model::{CurrencyWithRegions, Post, Region, TagWithPosts};
use rusqlite::Connection;
use uuid::Uuid;

/// Load a currency and every region it circulates in
pub fn load_currency_with_regions(
    conn: &Connection,
    uid: Uuid,
) -> Result<Option<CurrencyWithRegions>> {
    let currency = match currencies::get_currency(conn, uid)? {
        Some(currency) => currency,
        None => return Ok(None),
    };

    let mut stmt = conn
        .prepare(
            "SELECT r.UID, r.CountryISOCode
             FROM Regions r
             JOIN RegionCurrency rc ON rc.RegionUID = r.UID
             WHERE rc.CurrencyUID = ?1
             ORDER BY r.UID",
        )
        .map_err(from_rusqlite)?;

    let regions = stmt
        .query_map([uid.to_string()], |row| {
            let uid_text: String = row.get(0)?;
            Ok(Region {
                uid: uuid_column(0, uid_text)?,
                country_iso_code: row.get(1)?,
            })
        })
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(from_rusqlite)?;

    Ok(Some(CurrencyWithRegions { currency, regions }))
}

/// Load a tag and every post carrying it
pub fn load_tag_with_posts(conn: &Connection, tag_id: &str) -> Result<Option<TagWithPosts>> {
    let tag = match tags::get_tag(conn, tag_id)? {
        Some(tag) => tag,
        None => return Ok(None),
    };

    let mut stmt = conn
        .prepare(
            "SELECT p.PostId, p.Title, p.Content
             FROM Posts p
             JOIN PostTag pt ON pt.PostId = p.PostId
             WHERE pt.TagId = ?1
             ORDER BY p.PostId",
        )
        .map_err(from_rusqlite)?;

    let posts = stmt
        .query_map([tag_id], |row| {
            Ok(Post {
                post_id: row.get(0)?,
                title: row.get(1)?,
                content: row.get(2)?,
            })
        })
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(from_rusqlite)?;

    Ok(Some(TagWithPosts { tag, posts }))
}
