use std::sync::Arc;

use crate::model::Post;
use crate::posts::state::FetchStatus;
use crate::store::Snapshot;

/// All posts in insertion order.
pub fn select_all_posts(snapshot: &Snapshot) -> &[Arc<Post>] {
    &snapshot.posts.posts
}

pub fn select_post_by_id<'a>(snapshot: &'a Snapshot, id: &str) -> Option<&'a Arc<Post>> {
    snapshot.posts.find(id)
}

pub fn select_posts_by_user<'a>(
    snapshot: &'a Snapshot,
    user_id: &'a str,
) -> impl Iterator<Item = &'a Arc<Post>> + 'a {
    snapshot
        .posts
        .posts
        .iter()
        .filter(move |post| post.user == user_id)
}

pub fn select_posts_status(snapshot: &Snapshot) -> FetchStatus {
    snapshot.posts.status
}

pub fn select_posts_error(snapshot: &Snapshot) -> Option<&str> {
    snapshot.posts.error.as_deref()
}
