//! Post persistence and the PostTag junction

use crate::errors::{from_rusqlite, Result};
use junction_core::model::{Post, PostTag};
use rusqlite::{Connection, OptionalExtension};

/// Insert a post and return it with its store-assigned row id
pub fn insert_post(conn: &Connection, title: &str, content: &str) -> Result<Post> {
    conn.execute(
        "INSERT INTO Posts (Title, Content) VALUES (?1, ?2)",
        rusqlite::params![title, content],
    )
    .map_err(from_rusqlite)?;

    Ok(Post {
        post_id: conn.last_insert_rowid(),
        title: title.to_string(),
        content: content.to_string(),
    })
}

/// Get a post by row id
pub fn get_post(conn: &Connection, post_id: i64) -> Result<Option<Post>> {
    conn.query_row(
        "SELECT PostId, Title, Content FROM Posts WHERE PostId = ?1",
        [post_id],
        |row| {
            Ok(Post {
                post_id: row.get(0)?,
                title: row.get(1)?,
                content: row.get(2)?,
            })
        },
    )
    .optional()
    .map_err(from_rusqlite)
}

/// List all posts ordered by row id
pub fn list_posts(conn: &Connection) -> Result<Vec<Post>> {
    let mut stmt = conn
        .prepare("SELECT PostId, Title, Content FROM Posts ORDER BY PostId")
        .map_err(from_rusqlite)?;

    let posts = stmt
        .query_map([], |row| {
            Ok(Post {
                post_id: row.get(0)?,
                title: row.get(1)?,
                content: row.get(2)?,
            })
        })
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(from_rusqlite)?;

    Ok(posts)
}

/// Delete a post; returns whether a row was removed
///
/// Junction rows referencing the post go with it via cascade. Its row
/// id is never handed out again.
pub fn delete_post(conn: &Connection, post_id: i64) -> Result<bool> {
    let affected = conn
        .execute("DELETE FROM Posts WHERE PostId = ?1", [post_id])
        .map_err(from_rusqlite)?;

    Ok(affected > 0)
}

/// Attach a tag to a post
///
/// Both sides must already exist: a missing post or tag surfaces as a
/// foreign key violation, a repeated pair as a unique violation.
pub fn tag_post(conn: &Connection, edge: &PostTag) -> Result<()> {
    conn.execute(
        "INSERT INTO PostTag (PostId, TagId) VALUES (?1, ?2)",
        rusqlite::params![edge.post_id, edge.tag_id],
    )
    .map_err(from_rusqlite)?;

    Ok(())
}

/// Detach a tag from a post; returns whether the edge existed
pub fn untag_post(conn: &Connection, edge: &PostTag) -> Result<bool> {
    let affected = conn
        .execute(
            "DELETE FROM PostTag WHERE PostId = ?1 AND TagId = ?2",
            rusqlite::params![edge.post_id, edge.tag_id],
        )
        .map_err(from_rusqlite)?;

    Ok(affected > 0)
}
