//! The network collaborator.
//!
//! The store treats each call as one asynchronous step that either succeeds
//! with a value or fails with a [`SourceError`]. Retry, caching and timeout
//! policy belong to the implementation, not to the state container.

mod error;
mod http;
mod memory;

use async_trait::async_trait;

use crate::model::{NewPost, Post, User};

pub use error::SourceError;
pub use http::HttpSource;
pub use memory::InMemorySource;

#[async_trait]
pub trait RemoteSource: Send + Sync {
    /// Returns the name of this source for logging.
    fn name(&self) -> &'static str;

    /// `GET posts-collection`.
    async fn fetch_posts(&self) -> Result<Vec<Post>, SourceError>;

    /// `POST posts-collection`. The source assigns id, date and empty reactions.
    async fn add_post(&self, new_post: NewPost) -> Result<Post, SourceError>;

    /// `GET users-collection`.
    async fn fetch_users(&self) -> Result<Vec<User>, SourceError>;
}
