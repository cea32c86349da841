use serde::{Deserialize, Serialize};

use super::post::Post;

/// Tag - a label that can be attached to any number of posts
///
/// The tag's text is its primary key; there is no surrogate id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// The tag text, unique across the store
    pub tag_id: String,
}

impl Tag {
    /// Create a tag with the given text
    pub fn new(tag_id: impl Into<String>) -> Self {
        Self {
            tag_id: tag_id.into(),
        }
    }
}

/// A tag together with every post carrying it, loaded in one lookup.
///
/// `posts` is empty (not absent) when the tag exists but nothing links
/// to it. Posts are ordered by ascending `post_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagWithPosts {
    pub tag: Tag,
    pub posts: Vec<Post>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tag() {
        let tag = Tag::new("rust");
        assert_eq!(tag.tag_id, "rust");
    }

    #[test]
    fn test_tag_with_posts_roundtrips_empty_collection() {
        let loaded = TagWithPosts {
            tag: Tag::new("orphan"),
            posts: Vec::new(),
        };

        let json = serde_json::to_string(&loaded).unwrap();
        assert!(json.contains("\"posts\":[]"));

        let back: TagWithPosts = serde_json::from_str(&json).unwrap();
        assert!(back.posts.is_empty());
    }
}
