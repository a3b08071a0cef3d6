use serde::{Deserialize, Serialize};

/// A post as served by the API
///
/// `id` and `userId` are server-assigned; a post composed locally has
/// neither until the create call returns. Posts are never edited once
/// received.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(rename = "userId", default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,
    pub title: String,
    pub body: String,
}

/// Request body for creating a post
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewPost {
    pub title: String,
    pub body: String,
}

/// The two user-visible failure kinds
///
/// Each carries a fixed message and nothing else; the underlying cause is
/// logged in the network layer, never shown to the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedError {
    FetchList,
    CreatePost,
}

impl FeedError {
    pub fn message(&self) -> &'static str {
        match self {
            FeedError::FetchList => "Failed to fetch post list",
            FeedError::CreatePost => "Failed to add new post",
        }
    }
}

/// Top-level screen phase
///
/// Loading holds only until the first fetch resolves; after that the
/// screen moves between Ready and Error and never returns to Loading.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ScreenPhase {
    #[default]
    Loading,
    Error(FeedError),
    Ready,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_post_wire_shape() {
        let new_post = NewPost {
            title: "T".to_string(),
            body: "B".to_string(),
        };
        let value = serde_json::to_value(&new_post).unwrap();
        assert_eq!(value, serde_json::json!({"title": "T", "body": "B"}));
    }

    #[test]
    fn test_post_deserializes_server_fields() {
        let post: Post =
            serde_json::from_str(r#"{"id":1,"userId":2,"title":"A","body":"X"}"#).unwrap();
        assert_eq!(post.id, Some(1));
        assert_eq!(post.user_id, Some(2));
        assert_eq!(post.title, "A");
    }

    #[test]
    fn test_unsent_post_serializes_without_server_fields() {
        let post = Post {
            id: None,
            user_id: None,
            title: "A".to_string(),
            body: "X".to_string(),
        };
        let value = serde_json::to_value(&post).unwrap();
        assert_eq!(value, serde_json::json!({"title": "A", "body": "X"}));
    }
}
