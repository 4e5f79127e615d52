//! In-process stand-in for the posts/users API.
//!
//! Behaves like the fake API the web client develops against: the server
//! side owns id and date assignment, and every call can be made to fail or
//! to take a while.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;
use uuid::Uuid;

use crate::model::{NewPost, Post, Reactions, User};

use super::error::SourceError;
use super::RemoteSource;

struct MemoryData {
    users: Vec<User>,
    posts: Vec<Post>,
}

pub struct InMemorySource {
    data: Mutex<MemoryData>,
    failure: Mutex<Option<String>>,
    latency: Option<Duration>,
}

impl InMemorySource {
    pub fn new(users: Vec<User>, posts: Vec<Post>) -> Self {
        Self {
            data: Mutex::new(MemoryData { users, posts }),
            failure: Mutex::new(None),
            latency: None,
        }
    }

    /// Four users and two posts.
    pub fn seeded() -> Self {
        let now = Utc::now();
        let users = vec![
            User::new("0", "Tianna Jenkins"),
            User::new("1", "Kevin Grant"),
            User::new("2", "Madison Price"),
            User::new("3", "Andy Weir"),
        ];
        let posts = vec![
            Post {
                id: "1".to_string(),
                title: "First Post!".to_string(),
                content: "Hello World!".to_string(),
                user: "0".to_string(),
                date: now - chrono::Duration::minutes(10),
                reactions: Reactions::default(),
            },
            Post {
                id: "2".to_string(),
                title: "Second Post".to_string(),
                content: "Lorem ipsum dolor sit amet".to_string(),
                user: "2".to_string(),
                date: now - chrono::Duration::minutes(5),
                reactions: Reactions::default(),
            },
        ];
        Self::new(users, posts)
    }

    /// Delay every call by `latency` before answering.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Make every following call fail with `message` until [`recover`](Self::recover).
    pub fn fail_with(&self, message: impl Into<String>) {
        *self.failure.lock() = Some(message.into());
    }

    pub fn recover(&self) {
        *self.failure.lock() = None;
    }

    /// Posts as stored on the "server" side.
    pub fn stored_posts(&self) -> Vec<Post> {
        self.data.lock().posts.clone()
    }

    async fn respond(&self) -> Result<(), SourceError> {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        match self.failure.lock().clone() {
            Some(message) => Err(SourceError::Rejected(message)),
            None => Ok(()),
        }
    }
}

impl Default for InMemorySource {
    fn default() -> Self {
        Self::seeded()
    }
}

#[async_trait]
impl RemoteSource for InMemorySource {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn fetch_posts(&self) -> Result<Vec<Post>, SourceError> {
        self.respond().await?;
        Ok(self.data.lock().posts.clone())
    }

    async fn add_post(&self, new_post: NewPost) -> Result<Post, SourceError> {
        self.respond().await?;
        new_post
            .validate()
            .map_err(|err| SourceError::Rejected(err.to_string()))?;

        let post = Post {
            id: Uuid::new_v4().to_string(),
            title: new_post.title,
            content: new_post.content,
            user: new_post.user,
            date: Utc::now(),
            reactions: Reactions::default(),
        };
        self.data.lock().posts.push(post.clone());
        Ok(post)
    }

    async fn fetch_users(&self) -> Result<Vec<User>, SourceError> {
        self.respond().await?;
        Ok(self.data.lock().users.clone())
    }
}
