use serde::{Deserialize, Serialize};

/// Post - a blog entry that can carry any number of tags
///
/// Posts are keyed by a store-assigned integer row id. Because the key
/// column is declared `AUTOINCREMENT`, ids of deleted posts are never
/// reused for later inserts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Row id assigned by the store at insertion
    pub post_id: i64,

    /// Headline of the post
    pub title: String,

    /// Body text of the post
    pub content: String,
}
