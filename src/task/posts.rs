use async_trait::async_trait;
use uuid::Uuid;

use crate::action::Action;
use crate::model::{NewPost, Post};
use crate::posts::{FetchStatus, PostsIntent};
use crate::source::{RemoteSource, SourceError};
use crate::store::Snapshot;

use super::AsyncTask;

/// Fetch-all, guarded so that only an `Idle` slice starts a fetch.
///
/// A settled fetch (succeeded or failed) is not repeated until the slice is
/// reset with [`PostsIntent::FetchStatusReset`] or by logging out.
///
/// Each run carries its own request id so the slice can tell this call's
/// settle phase apart from one started before a logout.
pub struct FetchPosts {
    request_id: String,
}

impl FetchPosts {
    pub fn new() -> Self {
        Self::with_request_id(Uuid::new_v4().to_string())
    }

    pub fn with_request_id(request_id: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
        }
    }

    pub fn request_id(&self) -> &str {
        &self.request_id
    }
}

impl Default for FetchPosts {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AsyncTask for FetchPosts {
    type Output = Vec<Post>;

    fn name(&self) -> &'static str {
        "posts/fetchPosts"
    }

    fn condition(&self, snapshot: &Snapshot) -> bool {
        snapshot.posts.status == FetchStatus::Idle
    }

    fn started(&self) -> Action {
        PostsIntent::FetchStarted {
            request_id: self.request_id.clone(),
        }
        .into()
    }

    async fn call(&self, source: &dyn RemoteSource) -> Result<Vec<Post>, SourceError> {
        source.fetch_posts().await
    }

    fn resolved(&self, output: &Vec<Post>) -> Action {
        PostsIntent::FetchResolved {
            request_id: self.request_id.clone(),
            posts: output.clone(),
        }
        .into()
    }

    fn rejected(&self, error: &SourceError) -> Action {
        PostsIntent::FetchRejected {
            request_id: self.request_id.clone(),
            message: error.to_string(),
        }
        .into()
    }
}

/// Create one post. The post enters the slice only once the source has
/// returned it with its final id and date.
pub struct AddNewPost {
    pub new_post: NewPost,
}

#[async_trait]
impl AsyncTask for AddNewPost {
    type Output = Post;

    fn name(&self) -> &'static str {
        "posts/addNewPost"
    }

    fn started(&self) -> Action {
        PostsIntent::AddNewPostStarted.into()
    }

    async fn call(&self, source: &dyn RemoteSource) -> Result<Post, SourceError> {
        source.add_post(self.new_post.clone()).await
    }

    fn resolved(&self, output: &Post) -> Action {
        PostsIntent::AddNewPostResolved {
            post: output.clone(),
        }
        .into()
    }

    fn rejected(&self, error: &SourceError) -> Action {
        PostsIntent::AddNewPostRejected {
            message: error.to_string(),
        }
        .into()
    }
}
