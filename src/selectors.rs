//! Derived views that read more than one slice, plus memoized views.
//!
//! Single-slice selectors live next to their slice (`auth`, `users`,
//! `posts`) and are re-exported here so callers have one place to look.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::model::{Post, User};
use crate::posts::PostsState;
use crate::store::Snapshot;

pub use crate::auth::{select_current_username, select_is_logged_in};
pub use crate::posts::{
    select_all_posts, select_post_by_id, select_posts_by_user, select_posts_error,
    select_posts_status,
};
pub use crate::users::{select_all_users, select_user_by_id, select_user_name};

/// The logged-in user. Logged out and unknown-to-the-roster both yield `None`.
pub fn select_current_user(snapshot: &Snapshot) -> Option<&User> {
    select_current_username(snapshot).and_then(|id| select_user_by_id(snapshot, id))
}

/// Whether the logged-in user authored `post_id`.
pub fn select_can_edit_post(snapshot: &Snapshot, post_id: &str) -> bool {
    match (
        select_current_username(snapshot),
        select_post_by_id(snapshot, post_id),
    ) {
        (Some(username), Some(post)) => post.user == username,
        _ => false,
    }
}

/// Posts newest first. Posts with the same date keep insertion order.
pub fn select_posts_by_recency(snapshot: &Snapshot) -> Vec<Arc<Post>> {
    sorted_by_recency(&snapshot.posts)
}

fn sorted_by_recency(posts: &PostsState) -> Vec<Arc<Post>> {
    let mut sorted = posts.posts.clone();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted
}

/// Memoized [`select_posts_by_recency`].
///
/// Recomputes only when the posts slice is a different allocation than on
/// the previous call, and otherwise hands back the same `Arc`, so callers
/// can compare results by identity.
#[derive(Default)]
pub struct PostsByRecency {
    cache: Mutex<Option<(Arc<PostsState>, Arc<[Arc<Post>]>)>>,
}

impl PostsByRecency {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&self, snapshot: &Snapshot) -> Arc<[Arc<Post>]> {
        let mut cache = self.cache.lock();
        if let Some((input, output)) = cache.as_ref() {
            if Arc::ptr_eq(input, &snapshot.posts) {
                return Arc::clone(output);
            }
        }
        let output: Arc<[Arc<Post>]> = sorted_by_recency(&snapshot.posts).into();
        *cache = Some((Arc::clone(&snapshot.posts), Arc::clone(&output)));
        output
    }
}
