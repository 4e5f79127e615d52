//! Errors reported to callers of the strict dispatch helpers.
//!
//! Reducers never fail. These errors exist for callers that want input
//! checked before an action is dispatched, and for `create_post`, whose
//! failure is reported to the caller instead of being recorded in state.

use thiserror::Error;

use crate::source::SourceError;

/// Caller-provided input violates a constraint.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Post title must not be empty")]
    EmptyTitle,

    #[error("Post content must not be empty")]
    EmptyContent,

    #[error("Post author must not be empty")]
    EmptyAuthor,

    #[error("Username must not be empty")]
    EmptyUsername,

    #[error("Unknown reaction '{0}'")]
    UnknownReaction(String),
}

/// Errors returned by [`Store::create_post`](crate::Store::create_post).
#[derive(Debug, Error)]
pub enum CreatePostError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Failed to save the post: {0}")]
    Source(#[from] SourceError),
}
