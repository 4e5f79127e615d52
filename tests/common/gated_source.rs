//! A `RemoteSource` whose fetch-all calls stay in flight until released.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chirper::model::{NewPost, Post, Reactions, User};
use chirper::source::{RemoteSource, SourceError};
use parking_lot::Mutex;
use tokio::sync::Notify;

pub struct GatedSource {
    /// Call `n` answers with `feeds[n]`, or the last feed past the end.
    feeds: Vec<Vec<Post>>,
    users: Vec<User>,
    /// One gate per fetch-all call, created on first use.
    gates: Mutex<Vec<Arc<Notify>>>,
    released: AtomicUsize,
    failure: Mutex<Option<String>>,
    fetch_posts_calls: AtomicUsize,
    add_post_calls: AtomicUsize,
}

impl GatedSource {
    pub fn new(posts: Vec<Post>, users: Vec<User>) -> Self {
        Self::with_feeds(vec![posts], users)
    }

    pub fn with_feeds(feeds: Vec<Vec<Post>>, users: Vec<User>) -> Self {
        Self {
            feeds,
            users,
            gates: Mutex::new(Vec::new()),
            released: AtomicUsize::new(0),
            failure: Mutex::new(None),
            fetch_posts_calls: AtomicUsize::new(0),
            add_post_calls: AtomicUsize::new(0),
        }
    }

    fn gate(&self, call: usize) -> Arc<Notify> {
        let mut gates = self.gates.lock();
        while gates.len() <= call {
            gates.push(Arc::new(Notify::new()));
        }
        gates[call].clone()
    }

    /// Let the oldest unreleased fetch-all call answer.
    pub fn release(&self) {
        let call = self.released.fetch_add(1, Ordering::SeqCst);
        self.release_call(call);
    }

    /// Let fetch-all call number `call` (zero-based) answer, whether or not
    /// it has been made yet.
    pub fn release_call(&self, call: usize) {
        self.gate(call).notify_one();
    }

    /// Held fetches answer with this error once released.
    pub fn fail_with(&self, message: &str) {
        *self.failure.lock() = Some(message.to_string());
    }

    pub fn fetch_posts_calls(&self) -> usize {
        self.fetch_posts_calls.load(Ordering::SeqCst)
    }

    pub fn add_post_calls(&self) -> usize {
        self.add_post_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RemoteSource for GatedSource {
    fn name(&self) -> &'static str {
        "gated"
    }

    async fn fetch_posts(&self) -> Result<Vec<Post>, SourceError> {
        let call = self.fetch_posts_calls.fetch_add(1, Ordering::SeqCst);
        self.gate(call).notified().await;

        let failure = self.failure.lock().clone();
        if let Some(message) = failure {
            return Err(SourceError::Rejected(message));
        }
        let feed = self
            .feeds
            .get(call)
            .or_else(|| self.feeds.last())
            .cloned()
            .unwrap_or_default();
        Ok(feed)
    }

    async fn add_post(&self, new_post: NewPost) -> Result<Post, SourceError> {
        let n = self.add_post_calls.fetch_add(1, Ordering::SeqCst);
        Ok(Post {
            id: format!("server-{n}"),
            title: new_post.title,
            content: new_post.content,
            user: new_post.user,
            date: chrono::Utc::now(),
            reactions: Reactions::default(),
        })
    }

    async fn fetch_users(&self) -> Result<Vec<User>, SourceError> {
        Ok(self.users.clone())
    }
}
