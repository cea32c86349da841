use serde::{Deserialize, Serialize};

/// PostTag - one edge in the many-to-many relation between posts and tags
///
/// The pair `(post_id, tag_id)` is the composite primary key, so the
/// same tag cannot be attached to the same post twice. Both sides are
/// foreign keys with cascade delete: removing a post or a tag removes
/// its edges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostTag {
    pub post_id: i64,
    pub tag_id: String,
}

impl PostTag {
    /// Create an edge linking the given post and tag
    pub fn new(post_id: i64, tag_id: impl Into<String>) -> Self {
        Self {
            post_id,
            tag_id: tag_id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_edge() {
        let edge = PostTag::new(3, "rust");
        assert_eq!(edge.post_id, 3);
        assert_eq!(edge.tag_id, "rust");
    }
}
