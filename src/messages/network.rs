//! Network messages - communication between App and Network layers

use crate::models::Post;

/// Which list fetch a command or response belongs to
///
/// Refresh uses a larger page and brackets the `refreshing` flag; the
/// initial fetch is the one that moves the screen out of Loading.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchKind {
    Initial,
    Refresh,
}

/// Commands sent from App layer to Network layer
#[derive(Debug, Clone)]
pub enum NetworkCommand {
    /// Fetch the post list (`GET /posts?_limit={limit}`)
    FetchPosts {
        id: u64,
        kind: FetchKind,
        limit: usize,
    },
    /// Create a post (`POST /posts`)
    CreatePost {
        id: u64,
        title: String,
        body: String,
    },
    /// Shutdown the network actor
    Shutdown,
}

/// Responses sent from Network layer to App layer
///
/// Failure variants carry no detail on purpose: the cause is logged where
/// it happened and the app layer maps the variant to a fixed user message.
#[derive(Debug, Clone)]
pub enum NetworkResponse {
    /// Post list fetched successfully, in server order
    PostsFetched {
        id: u64,
        kind: FetchKind,
        posts: Vec<Post>,
    },
    /// A list fetch failed (transport error, bad status, or non-JSON body)
    FetchFailed { id: u64, kind: FetchKind },
    /// The server accepted the new post and assigned it an id
    PostCreated { id: u64, post: Post },
    /// The create call failed
    CreateFailed { id: u64 },
}

impl NetworkResponse {
    /// Get the request ID from the response
    pub fn id(&self) -> u64 {
        match self {
            NetworkResponse::PostsFetched { id, .. } => *id,
            NetworkResponse::FetchFailed { id, .. } => *id,
            NetworkResponse::PostCreated { id, .. } => *id,
            NetworkResponse::CreateFailed { id } => *id,
        }
    }
}
