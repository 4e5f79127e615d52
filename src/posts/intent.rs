use crate::model::{Post, ReactionKind};

/// Intents owned by the posts slice.
#[derive(Debug, Clone, PartialEq)]
pub enum PostsIntent {
    /// Fetch-all lifecycle. Every phase of one call carries the same
    /// `request_id`; settle phases for any other id are ignored.
    FetchStarted { request_id: String },
    FetchResolved { request_id: String, posts: Vec<Post> },
    FetchRejected { request_id: String, message: String },

    /// Returns a settled fetch to `Idle` so the next fetch-all is honored.
    /// Ignored while a fetch is pending.
    FetchStatusReset,

    /// Create-post lifecycle. Only the resolved phase changes state.
    AddNewPostStarted,
    AddNewPostResolved { post: Post },
    AddNewPostRejected { message: String },

    PostUpdated {
        id: String,
        title: String,
        content: String,
    },
    ReactionAdded {
        post_id: String,
        reaction: ReactionKind,
    },
}
