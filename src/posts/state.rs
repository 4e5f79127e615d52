use std::fmt;
use std::sync::Arc;

use crate::model::Post;
use crate::mvi::SliceState;

/// Lifecycle of the fetch-all operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchStatus {
    #[default]
    Idle,
    /// Exactly one fetch-all is outstanding.
    Pending,
    Succeeded,
    Failed,
}

impl FetchStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            FetchStatus::Idle => "idle",
            FetchStatus::Pending => "pending",
            FetchStatus::Succeeded => "succeeded",
            FetchStatus::Failed => "failed",
        }
    }

    pub fn is_settled(self) -> bool {
        matches!(self, FetchStatus::Succeeded | FetchStatus::Failed)
    }
}

impl fmt::Display for FetchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Posts in insertion order plus the fetch lifecycle.
///
/// Posts are held behind `Arc` so that a new state shares every post the
/// transition did not touch with the previous one.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PostsState {
    pub posts: Vec<Arc<Post>>,
    pub status: FetchStatus,
    /// Only set while `status` is `Failed`.
    pub error: Option<String>,
    /// Id of the outstanding fetch-all. Only set while `status` is `Pending`.
    pub request_id: Option<String>,
}

impl SliceState for PostsState {}

impl PostsState {
    pub fn with_posts(posts: impl IntoIterator<Item = Post>, status: FetchStatus) -> Self {
        Self {
            posts: posts.into_iter().map(Arc::new).collect(),
            status,
            error: None,
            request_id: None,
        }
    }

    /// Whether `request_id` names the fetch-all this slice is waiting on.
    pub fn is_awaiting(&self, request_id: &str) -> bool {
        self.status == FetchStatus::Pending && self.request_id.as_deref() == Some(request_id)
    }

    pub fn find(&self, id: &str) -> Option<&Arc<Post>> {
        self.posts.iter().find(|post| post.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    pub(crate) fn position(&self, id: &str) -> Option<usize> {
        self.posts.iter().position(|post| post.id == id)
    }
}
